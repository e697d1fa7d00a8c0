use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">"Profile"</h1>
            <p class="text-gray-600">"Profile details are not available yet."</p>
            <a href="/">"Back to users"</a>
        </div>
    }
}
