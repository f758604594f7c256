//! Role-based authorization over a request identity

use crate::domain::entities::RoleType;
use crate::domain::value_objects::Identity;
use crate::errors::{AuthError, DomainError, DomainResult};

/// Checks that a caller is authenticated and holds one of `required`.
///
/// An empty `required` slice only demands authentication.
///
/// # Returns
///
/// * `Ok(&Identity)` - Access granted
/// * `Err(DomainError::Unauthorized)` - No identity on the request
/// * `Err(AuthError::InsufficientPermissions)` - Identity lacks every required role
pub fn authorize<'a>(
    identity: Option<&'a Identity>,
    required: &[RoleType],
) -> DomainResult<&'a Identity> {
    let identity = identity.ok_or(DomainError::Unauthorized)?;

    if required.is_empty() || required.iter().any(|role| identity.has_role(*role)) {
        Ok(identity)
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}
