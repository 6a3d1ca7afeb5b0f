use crate::types::{CuratorError, Result};
use std::env;

pub const ENV_DATABASE_URL: &str = "CURATOR_DATABASE_URL";
pub const ENV_DATABASE_PASSWORD: &str = "CURATOR_DATABASE_PASSWORD";

/// Storage endpoint and credential, read from the process environment
/// at startup. Absence of either is a fatal startup error, distinct
/// from any run-time ingestion failure.
#[derive(Debug, Clone)]
pub struct CuratorConfig {
    pub database_url: String,
    pub database_password: String,
}

impl CuratorConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: require(ENV_DATABASE_URL)?,
            database_password: require(ENV_DATABASE_PASSWORD)?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| CuratorError::MissingEnv {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_a_distinct_error() {
        let err = require("CURATOR_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, CuratorError::MissingEnv { .. }));
        assert!(err.to_string().contains("CURATOR_TEST_UNSET_VARIABLE"));
    }
}
