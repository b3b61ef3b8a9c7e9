use serde::Deserialize;
use validator::Validate;

/// Request body for the demo sign-in endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
}
