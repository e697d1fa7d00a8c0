use super::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the users fetch reacts when something goes wrong.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchPolicy {
    /// Checks the status, logs every failure and falls back to an empty list.
    #[default]
    Guarded,
    /// No status check and no fallback, failures reach the caller.
    Unguarded,
}

impl FromStr for FetchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guarded" => Ok(FetchPolicy::Guarded),
            "unguarded" => Ok(FetchPolicy::Unguarded),
            other => Err(Error::InvalidConfig(format!(
                "unknown fetch policy '{other}', expected 'guarded' or 'unguarded'"
            ))),
        }
    }
}

impl fmt::Display for FetchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPolicy::Guarded => write!(f, "guarded"),
            FetchPolicy::Unguarded => write!(f, "unguarded"),
        }
    }
}
