use crate::model::types::*;
use axum::extract::FromRef;

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub reqwest_client: reqwest::Client,
    pub users_endpoint: String,
    pub fetch_policy: FetchPolicy,
}

impl AppState {
    pub fn new(users_endpoint: impl Into<String>, fetch_policy: FetchPolicy) -> Self {
        Self {
            reqwest_client: reqwest::Client::new(),
            users_endpoint: users_endpoint.into(),
            fetch_policy,
        }
    }

    /// Builds the state from `USERS_ENDPOINT` and `USERS_FETCH_POLICY`, loading `.env` first.
    pub fn from_env() -> Result<Self, Error> {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("didn't find env file");
        };
        let users_endpoint = env_or("USERS_ENDPOINT", DEFAULT_USERS_ENDPOINT)?;
        let fetch_policy = env_or("USERS_FETCH_POLICY", "guarded")?.parse()?;
        tracing::info!(%users_endpoint, %fetch_policy, "loaded configuration");
        Ok(Self::new(users_endpoint, fetch_policy))
    }
}

/// Address the server binds to, `SITE_ADDR` or [`DEFAULT_SITE_ADDR`].
pub fn site_addr() -> Result<String, Error> {
    env_or("SITE_ADDR", DEFAULT_SITE_ADDR)
}

fn env_or(key: &str, default: &str) -> Result<String, Error> {
    match std::env::var(key) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        temp_env::with_vars(
            [
                ("USERS_ENDPOINT", None::<&str>),
                ("USERS_FETCH_POLICY", None),
                ("SITE_ADDR", None),
            ],
            || {
                let state = AppState::from_env().unwrap();
                assert_eq!(state.users_endpoint, DEFAULT_USERS_ENDPOINT);
                assert_eq!(state.fetch_policy, FetchPolicy::Guarded);
                assert_eq!(site_addr().unwrap(), DEFAULT_SITE_ADDR);
            },
        );
    }

    #[test]
    fn reads_values_from_env() {
        temp_env::with_vars(
            [
                ("USERS_ENDPOINT", Some("http://127.0.0.1:9999/users")),
                ("USERS_FETCH_POLICY", Some("unguarded")),
                ("SITE_ADDR", Some("0.0.0.0:8080")),
            ],
            || {
                let state = AppState::from_env().unwrap();
                assert_eq!(state.users_endpoint, "http://127.0.0.1:9999/users");
                assert_eq!(state.fetch_policy, FetchPolicy::Unguarded);
                assert_eq!(site_addr().unwrap(), "0.0.0.0:8080");
            },
        );
    }

    #[test]
    fn unknown_policy_is_invalid_config() {
        temp_env::with_vars(
            [
                ("USERS_ENDPOINT", None::<&str>),
                ("USERS_FETCH_POLICY", Some("sometimes")),
            ],
            || {
                let err = AppState::from_env().unwrap_err();
                assert!(matches!(err, Error::InvalidConfig(_)));
                assert!(err.to_string().contains("sometimes"));
            },
        );
    }
}
