const DEFAULT_SOURCE: &str = "direct";

/// Free-text label identifying where a signup originated (a campaign, a company
/// page, etc). Absent or empty labels collapse to "direct".
#[derive(Debug, Clone, serde::Serialize)]
pub struct SignupSource(String);

impl SignupSource {
    pub fn parse(source: Option<String>) -> SignupSource {
        match source {
            Some(source) if !source.is_empty() => Self(source),
            _ => Self(String::from(DEFAULT_SOURCE)),
        }
    }
}

impl AsRef<str> for SignupSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
