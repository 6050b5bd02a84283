// Model exports
pub mod requests;
pub mod responses;

pub use requests::ChatRequest;
pub use responses::{ChatResponse, ErrorResponse, HealthResponse};
