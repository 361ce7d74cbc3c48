#[derive(Debug, Clone, serde::Serialize)]
pub struct SignupEmail(String);

impl SignupEmail {
    /// Minimal syntactic check: anything containing an '@' is accepted.
    pub fn parse(email: String) -> Result<SignupEmail, String> {
        if !email.contains('@') {
            return Err(String::from("Valid email is required"));
        }

        Ok(Self(email))
    }

    pub fn matches_ignoring_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
