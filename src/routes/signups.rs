use actix_web::{web, HttpResponse, ResponseError};
use chrono::Utc;
use reqwest::StatusCode;

use crate::domain::new_signup::{NewSignup, NewSignupBody};
use crate::domain::signup::SignupRecord;
use crate::routes::ErrorResponse;
use crate::signup_store::{SignupStore, StoreError};

#[derive(serde::Serialize)]
pub struct SignupCreatedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct SignupListResponse {
    pub signups: Vec<SignupRecord>,
}

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Email already registered")]
    DuplicateError,
    #[error("Failed to process signup")]
    StorageError(#[from] StoreError),
}

#[derive(thiserror::Error)]
pub enum ListSignupsError {
    #[error("Failed to read signups")]
    StorageError(#[from] StoreError),
}

#[tracing::instrument(
    name = "Creating a new signup handler",
    skip(body, store),
    fields(
        signup_email = ?body.email,
        signup_source = ?body.source
    )
)]
pub async fn handle_create_signup(
    body: web::Json<NewSignupBody>,
    store: web::Data<SignupStore>,
) -> Result<HttpResponse, SignupError> {
    let new_signup: NewSignup = body.try_into().map_err(SignupError::ValidationError)?;

    // Read-then-decide duplicate check. Not a storage constraint: two in-flight
    // requests can both pass it, the second write wins.
    let mut signups = store.read_all().await?;

    if is_already_registered(&signups, &new_signup) {
        return Err(SignupError::DuplicateError);
    }

    signups.push(SignupRecord {
        email: String::from(new_signup.email.as_ref()),
        source: String::from(new_signup.source.as_ref()),
        timestamp: Utc::now(),
    });

    store.write_all(&signups).await?;

    Ok(HttpResponse::Ok().json(SignupCreatedResponse {
        success: true,
        message: String::from("Successfully signed up!"),
    }))
}

#[tracing::instrument(name = "Listing all signups handler", skip(store))]
pub async fn handle_list_signups(
    store: web::Data<SignupStore>,
) -> Result<HttpResponse, ListSignupsError> {
    let signups = store.read_all().await?;

    Ok(HttpResponse::Ok().json(SignupListResponse { signups }))
}

fn is_already_registered(signups: &[SignupRecord], new_signup: &NewSignup) -> bool {
    signups
        .iter()
        .any(|signup| new_signup.email.matches_ignoring_case(&signup.email))
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SignupError::DuplicateError => StatusCode::BAD_REQUEST,
            SignupError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl std::fmt::Debug for ListSignupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for ListSignupsError {
    fn status_code(&self) -> StatusCode {
        match self {
            ListSignupsError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
