use shift_roster::display::{print_schedule, write_schedule_to_file};
use shift_roster::parser::load_roster;
use shift_roster::schedule::{
    create_schedule, find_conflicts, rng_from_seed, LocationMode, TimeWindow,
};

fn print_usage() {
    println!("Usage:");
    println!("  shift-roster <roster.csv> <start> <end> <interval> [options]");
    println!("  shift-roster web [port]");
    println!();
    println!("Options:");
    println!("  --locations <a,b,...>  schedule the named locations simultaneously");
    println!("  --randomize            shuffle between equally balanced choices");
    println!("  --seed <n>             make --randomize reproducible");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // Web mode
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        println!("Starting web server on port {}...", port);
        println!("Access the site at http://localhost:{}", port);
        shift_roster::web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode
    if args.len() < 5 {
        print_usage();
        return Ok(());
    }

    let roster_path = &args[1];
    let window = TimeWindow {
        start_time: args[2].clone(),
        end_time: args[3].clone(),
        interval_minutes: args[4].parse().unwrap_or(0),
    };

    let mut mode = LocationMode::Single;
    let mut randomize = false;
    let mut seed = None;
    let mut rest = args[5..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--locations" => {
                let names: Vec<String> = rest
                    .next()
                    .map(|list| {
                        list.split(',')
                            .map(|name| name.trim().to_string())
                            .filter(|name| !name.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                if names.is_empty() {
                    eprintln!("--locations requires a comma-separated list of names");
                    return Ok(());
                }
                mode = LocationMode::Multiple(names);
            }
            "--randomize" => randomize = true,
            "--seed" => seed = rest.next().and_then(|s| s.parse().ok()),
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                return Ok(());
            }
        }
    }

    println!("Loading roster from {}...", roster_path);
    let roster = load_roster(roster_path)?;
    println!("Loaded {} volunteers", roster.len());

    let minimum = match mode {
        LocationMode::Single => 2,
        LocationMode::Multiple(_) => 4,
    };
    if roster.len() < minimum {
        eprintln!("At least {} volunteers are required for this mode", minimum);
        return Ok(());
    }

    let mut rng = rng_from_seed(seed);
    let schedule = create_schedule(&roster, &window, &mode, randomize, &mut rng);
    if schedule.slots.is_empty() {
        eprintln!("The time window does not fit a single shift; check the times and interval");
        return Ok(());
    }
    let conflicts = find_conflicts(&schedule.assignments);

    print_schedule(&schedule, &conflicts);

    write_schedule_to_file(&schedule, &conflicts, "schedule.txt")?;
    println!("\nSchedule saved to schedule.txt");

    Ok(())
}
