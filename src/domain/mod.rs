pub mod company_name;
pub mod copy_field;
pub mod copy_request;
pub mod new_signup;
pub mod signup;
pub mod signup_email;
pub mod signup_source;
