use actix_web::{web, HttpResponse, ResponseError};
use reqwest::StatusCode;

use crate::copy_client::{CopyClient, CopyClientError};
use crate::domain::copy_request::{CopyRequest, GenerateCopyBody};
use crate::routes::ErrorResponse;

#[derive(serde::Serialize)]
pub struct GeneratedCopyResponse {
    pub text: String,
}

#[derive(thiserror::Error)]
pub enum GenerateCopyError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Copy generation is not configured")]
    ConfigurationError(#[source] CopyClientError),
    #[error("Failed to generate copy")]
    GenerationError(#[source] CopyClientError),
}

#[tracing::instrument(
    name = "Generating landing page copy handler",
    skip(body, copy_client),
    fields(
        company_name = ?body.company_name,
        copy_field = ?body.field
    )
)]
pub async fn handle_generate_copy(
    body: web::Json<GenerateCopyBody>,
    copy_client: web::Data<CopyClient>,
) -> Result<HttpResponse, GenerateCopyError> {
    let request: CopyRequest = body.try_into().map_err(GenerateCopyError::ValidationError)?;

    let text = copy_client
        .generate(&request.company_name, request.field)
        .await
        .map_err(|err| match err {
            CopyClientError::MissingApiKeyError => GenerateCopyError::ConfigurationError(err),
            CopyClientError::RequestError(_) => GenerateCopyError::GenerationError(err),
        })?;

    Ok(HttpResponse::Ok().json(GeneratedCopyResponse { text }))
}

impl std::fmt::Debug for GenerateCopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for GenerateCopyError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerateCopyError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GenerateCopyError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GenerateCopyError::GenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
