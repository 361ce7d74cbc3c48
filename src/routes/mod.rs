mod copy;
mod health_check;
mod signups;
mod stats;

pub use copy::handle_generate_copy;
pub use health_check::health_check;
pub use signups::{handle_create_signup, handle_list_signups};
pub use stats::handle_signup_stats;

/// Body of every failed response: `{"error": "..."}`. Validation and duplicate
/// failures carry a corrective message, everything else a generic one.
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
