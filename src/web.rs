use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use actix_files::Files;
use std::sync::Mutex;

use crate::form::{export_schedule_to_csv, validate_request, GenerateRequest};
use crate::parser::roster_from_names;
use crate::schedule::{
    apply_edit, create_schedule, find_conflicts, rng_from_seed, Conflict, Edit, LocationMode,
    Schedule, TimeWindow,
};

// In-memory storage for the current schedule (persistence is out of scope)
pub struct AppState {
    pub schedule: Mutex<Option<Schedule>>,
    pub conflicts: Mutex<Vec<Conflict>>,
}

// Generate a fresh schedule from a validated request
async fn generate(
    req: web::Json<GenerateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(message) = validate_request(&req) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": message
        })));
    }

    let roster = roster_from_names(&req.volunteers);
    let window = TimeWindow {
        start_time: req.start_time.clone(),
        end_time: req.end_time.clone(),
        interval_minutes: req.interval_minutes,
    };
    let mode = if req.multiple_locations {
        LocationMode::Multiple(req.location_names.clone())
    } else {
        LocationMode::Single
    };

    let mut rng = rng_from_seed(req.seed);
    let schedule = create_schedule(&roster, &window, &mode, req.randomize, &mut rng);
    if schedule.slots.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "The time window does not fit a single shift"
        })));
    }
    let conflicts = find_conflicts(&schedule.assignments);

    let response = serde_json::json!({
        "success": true,
        "schedule": &schedule,
        "conflicts": &conflicts
    });
    *state.schedule.lock().unwrap() = Some(schedule);
    *state.conflicts.lock().unwrap() = conflicts;

    Ok(HttpResponse::Ok().json(response))
}

// Current schedule plus its conflicts
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();
    let conflicts = state.conflicts.lock().unwrap();

    if let Some(ref schedule) = *schedule {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "schedule": schedule,
            "conflicts": &*conflicts
        })))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No schedule generated yet"})))
    }
}

// Single-cell substitution through the edit guard
async fn edit_schedule(req: web::Json<Edit>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let edit = req.into_inner();
    let mut schedule = state.schedule.lock().unwrap();

    let Some(ref current) = *schedule else {
        return Ok(
            HttpResponse::NotFound().json(serde_json::json!({"error": "No schedule generated yet"}))
        );
    };

    match apply_edit(current, &edit) {
        Ok(outcome) => {
            let response = serde_json::json!({
                "success": true,
                "schedule": &outcome.schedule,
                "conflicts": &outcome.conflicts
            });
            *schedule = Some(outcome.schedule);
            *state.conflicts.lock().unwrap() = outcome.conflicts;
            Ok(HttpResponse::Ok().json(response))
        }
        Err(err) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "slot_index": edit.slot_index,
            "location_index": edit.location_index,
            "error": err.to_string()
        }))),
    }
}

// Current schedule as a CSV download
async fn export_csv(state: web::Data<AppState>) -> Result<HttpResponse> {
    let schedule = state.schedule.lock().unwrap();

    let Some(ref schedule) = *schedule else {
        return Ok(
            HttpResponse::NotFound().json(serde_json::json!({"error": "No schedule generated yet"}))
        );
    };

    let csv = export_schedule_to_csv(schedule)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Export failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(("Content-Disposition", "attachment; filename=\"schedule.csv\""))
        .body(csv))
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        schedule: Mutex::new(None),
        conflicts: Mutex::new(Vec::new()),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/generate", web::post().to(generate))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/edit", web::post().to(edit_schedule))
            .route("/api/export", web::get().to(export_csv))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
