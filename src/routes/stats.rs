use actix_web::{web, HttpResponse, ResponseError};
use chrono::Local;
use reqwest::StatusCode;

use crate::analytics::aggregate_signups;
use crate::routes::ErrorResponse;
use crate::signup_store::{SignupStore, StoreError};

#[derive(thiserror::Error)]
pub enum StatsError {
    #[error("Failed to read signups")]
    StorageError(#[from] StoreError),
}

/// Serves the aggregated projection so the dashboard does not have to derive
/// it from the raw list.
#[tracing::instrument(name = "Signup stats handler", skip(store))]
pub async fn handle_signup_stats(
    store: web::Data<SignupStore>,
) -> Result<HttpResponse, StatsError> {
    let signups = store.read_all().await?;
    let stats = aggregate_signups(&signups, Local::now());

    Ok(HttpResponse::Ok().json(stats))
}

impl std::fmt::Debug for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for StatsError {
    fn status_code(&self) -> StatusCode {
        match self {
            StatsError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
