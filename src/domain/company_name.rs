#[derive(Debug, Clone)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn parse(name: String) -> Result<CompanyName, String> {
        if name.trim().is_empty() {
            return Err(String::from("Company name is required"));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
