use crate::model::types::*;

/// Fetches the users from `endpoint`, once, without retries or a timeout of its own.
///
/// With [`FetchPolicy::Guarded`] this never fails: a refused connection, a non-success
/// status or a body that is not json gets logged and turns into an empty list.
/// With [`FetchPolicy::Unguarded`] the status is ignored and transport or decode
/// failures are handed back to the caller.
pub async fn get_users(
    client: &reqwest::Client,
    endpoint: &str,
    policy: FetchPolicy,
) -> Result<Users, Error> {
    match policy {
        FetchPolicy::Unguarded => request_users(client, endpoint, false).await,
        FetchPolicy::Guarded => match request_users(client, endpoint, true).await {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::error!(error = %e, endpoint, "failed to fetch users");
                Ok(Users::default())
            }
        },
    }
}

async fn request_users(
    client: &reqwest::Client,
    endpoint: &str,
    check_status: bool,
) -> Result<Users, Error> {
    let response = client.get(endpoint).send().await?;
    let status = response.status();
    tracing::debug!(endpoint, status = status.as_u16(), "users endpoint answered");

    if check_status && !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let users = serde_json::from_slice::<Users>(&body)?;
    Ok(users)
}
