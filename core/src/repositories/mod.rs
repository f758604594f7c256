pub mod role;
pub mod token;
pub mod user;

pub use role::RoleRepository;
pub use token::RefreshTokenRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use role::MockRoleRepository;
#[cfg(any(test, feature = "mocks"))]
pub use token::MockRefreshTokenRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user::MockUserRepository;
