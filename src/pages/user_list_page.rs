use crate::components::UserList;
use crate::model::{AppState, Error, get_users};
use leptos::prelude::*;

/// Fetches the users once and renders the list to html.
///
/// Under [`FetchPolicy::Unguarded`](crate::model::FetchPolicy::Unguarded) a failed fetch or a user without an email comes
/// back as an error, the caller decides how to show it.
pub async fn render_user_list(state: &AppState) -> Result<String, Error> {
    let users = get_users(
        &state.reqwest_client,
        &state.users_endpoint,
        state.fetch_policy,
    )
    .await?;
    let rows = users.into_rows(state.fetch_policy)?;
    tracing::debug!(
        rows = rows.as_ref().map_or(0, Vec::len),
        "rendering user list"
    );

    Ok(Owner::new().with(|| view! { <UserList rows /> }.to_html()))
}
