pub mod export;
pub mod submission;

pub use export::export_schedule_to_csv;
pub use submission::{validate_request, GenerateRequest};
