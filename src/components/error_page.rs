use leptos::prelude::*;

#[component]
pub fn ErrorPage(status: u16, message: String) -> impl IntoView {
    view! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">"Something went wrong"</h1>
            <p class="text-gray-600">{format!("{status}: {message}")}</p>
            <a href="/">"Try again"</a>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="p-8">
            <p>"Page not found."</p>
            <a href="/">"Back to users"</a>
        </div>
    }
}
