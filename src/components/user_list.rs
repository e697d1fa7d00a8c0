use crate::model::UserRow;
use leptos::{either::Either, prelude::*};

/// Where every "View Profile" link points.
pub const PROFILE_PATH: &str = "/profile";

#[component]
pub fn UserList(
    /// `None` renders the "No users found." line instead of a list.
    rows: Option<Vec<UserRow>>,
) -> impl IntoView {
    view! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">"User List"</h1>
            {match rows {
                Some(rows) => {
                    Either::Left(
                        view! {
                            <ul class="space-y-4">
                                <For
                                    each=move || rows.clone()
                                    key=|row| row.id
                                    children=move |row| view! { <UserListItem row /> }
                                />
                            </ul>
                        },
                    )
                }
                None => Either::Right(view! { <p class="text-gray-600">"No users found."</p> }),
            }}
        </div>
    }
}

#[component]
pub fn UserListItem(row: UserRow) -> impl IntoView {
    view! {
        <li class="p-4 border rounded-lg shadow-sm" data-user-id=row.id.to_string()>
            <p class="font-semibold">{row.name}</p>
            <p class="text-gray-600">{row.email}</p>
            <a href=PROFILE_PATH class="text-blue-600">
                "View Profile"
            </a>
        </li>
    }
}
