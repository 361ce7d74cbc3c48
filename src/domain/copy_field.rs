/// The landing-page field a piece of generated copy is destined for. Closed
/// set: any other value coming from the builder UI is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Headline,
    Description,
}

impl CopyField {
    pub fn parse(field: String) -> Result<CopyField, String> {
        match field.as_str() {
            "headline" => Ok(CopyField::Headline),
            "description" => Ok(CopyField::Description),
            _ => Err(format!("{} is not a valid copy field", field)),
        }
    }

    /// The instruction sent to the text generator for this field.
    pub fn instruction(&self, company_name: &str) -> String {
        match self {
            CopyField::Headline => format!(
                "Generate a compelling, concise headline (max 10 words) for a startup called \"{}\". \
                The headline should be exciting, clear, and action-oriented. \
                Only return the headline text, nothing else.",
                company_name
            ),
            CopyField::Description => format!(
                "Generate a compelling description (2-3 sentences, max 150 characters) for a startup called \"{}\". \
                Focus on the value proposition and what makes it unique. \
                Only return the description text, nothing else.",
                company_name
            ),
        }
    }
}

impl AsRef<str> for CopyField {
    fn as_ref(&self) -> &str {
        match self {
            CopyField::Headline => "headline",
            CopyField::Description => "description",
        }
    }
}
