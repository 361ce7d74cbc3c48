use actix_web::web;
use serde::Deserialize;

use crate::domain::company_name::CompanyName;
use crate::domain::copy_field::CopyField;

pub struct CopyRequest {
    pub company_name: CompanyName,
    pub field: CopyField,
}

#[derive(Deserialize, Debug)]
pub struct GenerateCopyBody {
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    pub field: Option<String>,
}

impl TryFrom<web::Json<GenerateCopyBody>> for CopyRequest {
    type Error = String;

    fn try_from(body: web::Json<GenerateCopyBody>) -> Result<Self, Self::Error> {
        let company_name = CompanyName::parse(body.company_name.clone().unwrap_or_default())?;
        let field = CopyField::parse(body.field.clone().unwrap_or_default())?;

        Ok(CopyRequest {
            company_name,
            field,
        })
    }
}
