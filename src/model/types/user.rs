use super::{Error, FetchPolicy};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Whatever the users endpoint answered with.
///
/// Any json array lands in `List`, its records are only decoded into [`User`] when the
/// rows are built. Anything else that is still valid json (an error object, `null`, a bare
/// string) lands in `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Users {
    List(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl Default for Users {
    fn default() -> Self {
        Users::List(Vec::new())
    }
}

impl From<Vec<User>> for Users {
    fn from(users: Vec<User>) -> Self {
        Users::List(
            users
                .into_iter()
                .map(|user| serde_json::json!(user))
                .collect(),
        )
    }
}

/// A user as it is shown in the list, email already lowercased.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Users {
    /// `None` means there is nothing to list: the body was not a list or no record in it
    /// could be shown.
    ///
    /// A record that is not a user fails the whole render under
    /// [`FetchPolicy::Unguarded`], under [`FetchPolicy::Guarded`] it is logged and skipped.
    pub fn into_rows(self, policy: FetchPolicy) -> Result<Option<Vec<UserRow>>, Error> {
        let records = match self {
            Users::List(records) => records,
            Users::Other(_) => return Ok(None),
        };

        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let user = match serde_json::from_value::<User>(record) {
                Ok(user) => user,
                Err(e) => match policy {
                    FetchPolicy::Unguarded => {
                        return Err(Error::Decode(format!("user at index {}: {}", index, e)));
                    }
                    FetchPolicy::Guarded => {
                        tracing::error!(index, error = %e, "skipping malformed user record");
                        continue;
                    }
                },
            };
            rows.push(user.into_row(policy)?);
        }

        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }
}

impl User {
    pub fn into_row(self, policy: FetchPolicy) -> Result<UserRow, Error> {
        let email = match (self.email, policy) {
            (Some(email), _) => email.to_lowercase(),
            (None, FetchPolicy::Guarded) => String::new(),
            (None, FetchPolicy::Unguarded) => return Err(Error::MissingEmail { id: self.id }),
        };
        Ok(UserRow {
            id: self.id,
            name: self.name,
            email,
        })
    }
}
