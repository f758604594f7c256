use sp_shared::config::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
    MAX_TOKEN_EXPIRY_SECONDS,
};
use thiserror::Error;

/// Startup configuration problems that must stop the server
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultSecretInProduction,

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    InvalidBcryptCost(u32),

    #[error("Token lifetimes must be between 1 and {} seconds", MAX_TOKEN_EXPIRY_SECONDS)]
    InvalidTokenExpiry,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Config {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Rejects settings the server must not run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jwt = &self.auth.jwt;

        if jwt.secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.environment.is_production() && jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::InvalidBcryptCost(self.auth.bcrypt_cost));
        }
        if !jwt.has_valid_expiry() {
            return Err(ConfigError::InvalidTokenExpiry);
        }

        if jwt.is_using_default_secret() {
            tracing::warn!("Using the development JWT secret; set JWT_SECRET");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: Environment) -> Config {
        Config {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    #[test]
    fn test_default_secret_allowed_in_development() {
        assert_eq!(config(Environment::Development).validate(), Ok(()));
    }

    #[test]
    fn test_default_secret_refused_in_production() {
        assert_eq!(
            config(Environment::Production).validate(),
            Err(ConfigError::DefaultSecretInProduction)
        );

        let mut config = config(Environment::Production);
        config.auth.jwt.secret = "a-real-production-secret".to_string();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        let mut config = config(Environment::Development);
        config.auth.bcrypt_cost = 3;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBcryptCost(3)));
    }

    #[test]
    fn test_token_expiry_must_be_positive() {
        let mut config = config(Environment::Development);
        config.auth.jwt.access_token_expiry = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTokenExpiry));
    }

    #[test]
    fn test_token_expiry_upper_bound() {
        let mut config = config(Environment::Development);
        config.auth.jwt.refresh_token_expiry = i64::MAX / 1000;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTokenExpiry));

        config.auth.jwt.refresh_token_expiry = MAX_TOKEN_EXPIRY_SECONDS;
        assert_eq!(config.validate(), Ok(()));
    }
}
