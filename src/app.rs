use leptos::prelude::*;

pub fn shell(title: String, body: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
            </head>
            <body inner_html=body></body>
        </html>
    }
}

/// Wraps an already rendered body into a full html document.
pub fn render_document(title: &str, body: String) -> String {
    let title = title.to_string();
    Owner::new().with(|| shell(title, body).to_html())
}

/// Renders a standalone view, used for the pages that need no data.
pub fn render_view<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ProfilePage;

    #[test]
    fn document_wraps_body() {
        let html = render_document("User List", "<p>hello</p>".to_string());
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title"));
        assert!(html.contains("User List"));
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn profile_page_links_back() {
        let html = render_view(|| view! { <ProfilePage /> });
        assert!(html.contains("Profile"));
        assert!(html.contains(r#"href="/""#));
    }
}
