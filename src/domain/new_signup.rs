use actix_web::web;
use serde::Deserialize;

use crate::domain::signup_email::SignupEmail;
use crate::domain::signup_source::SignupSource;

pub struct NewSignup {
    pub email: SignupEmail,
    pub source: SignupSource,
}

#[derive(Deserialize, Debug)]
pub struct NewSignupBody {
    pub email: Option<String>,
    pub source: Option<String>,
}

impl TryFrom<web::Json<NewSignupBody>> for NewSignup {
    type Error = String;

    fn try_from(body: web::Json<NewSignupBody>) -> Result<Self, Self::Error> {
        let email = SignupEmail::parse(body.email.clone().unwrap_or_default())?;
        let source = SignupSource::parse(body.source.clone());

        Ok(NewSignup { email, source })
    }
}
