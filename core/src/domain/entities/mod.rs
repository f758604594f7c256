//! Domain entities representing core business objects.

pub mod role;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use role::{Role, RoleType};
pub use token::{Claims, RefreshToken};
pub use user::User;
