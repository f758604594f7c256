use serde::{Deserialize, Serialize};
use sp_core::domain::entities::RoleType;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address used as the login name
    #[validate(
        email(message = "must be a well-formed email address"),
        length(min = 5, max = 20, message = "must be between 5 and 20 characters")
    )]
    pub username: String,

    #[validate(length(min = 5, max = 20, message = "must be between 5 and 20 characters"))]
    pub password: String,

    /// Requested roles; customer when the field is omitted. An explicit
    /// `null` is rejected and `[]` registers an account with no roles.
    #[serde(default = "default_roles")]
    pub roles: Vec<RoleDto>,
}

fn default_roles() -> Vec<RoleDto> {
    vec![RoleDto {
        name: RoleType::Customer,
    }]
}

impl RegisterRequest {
    pub fn role_types(&self) -> Vec<RoleType> {
        self.roles.iter().map(|role| role.name).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleDto {
    pub name: RoleType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a well-formed email address"))]
    pub username: String,

    #[validate(length(min = 1, message = "must not be blank"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub refresh_token: String,
}
