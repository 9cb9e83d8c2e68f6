use std::time::Duration;

use maud::{DOCTYPE, Markup, html};

/// Reload instruction for pages that poll. The target is explicit so that a page
/// rendered in answer to a form post reloads the GET view, not the post.
#[derive(Debug, Clone)]
pub struct Refresh {
    pub every: Duration,
    pub url: String,
}

impl Refresh {
    pub fn new(every: Duration, url: impl Into<String>) -> Self {
        Self {
            every,
            url: url.into(),
        }
    }

    fn content(&self) -> String {
        format!("{};url={}", self.every.as_secs(), self.url)
    }
}

pub fn page(title: &str, refresh: Option<&Refresh>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(refresh) = refresh {
                    meta http-equiv="refresh" content=(refresh.content());
                }
                title { (title) " | FTGO - Food To Go" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-gray-50 min-h-screen" {
                (navbar())
                main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8" {
                    (content)
                }
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between" {
                a href="/" class="text-xl font-bold text-orange-600" { "FTGO" }
                div class="flex space-x-6 text-sm font-medium" {
                    a href="/consumer/restaurants" class="text-gray-700 hover:text-orange-600" { "Consumer" }
                    a href="/restaurant" class="text-gray-700 hover:text-green-600" { "Restaurant" }
                    a href="/courier" class="text-gray-700 hover:text-blue-600" { "Courier" }
                }
            }
        }
    }
}

pub fn error_box(message: &str) -> Markup {
    html! {
        div class="bg-red-50 text-red-700 p-4 rounded-lg mb-4" { (message) }
    }
}

pub fn refresh_note(every: Duration) -> Markup {
    html! {
        p class="text-gray-500 text-sm mt-1" { "Auto-refreshes every " (every.as_secs()) " seconds" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_meta_targets_get_view() {
        let refresh = Refresh::new(Duration::from_secs(15), "/consumer/orders");
        let html = page("Orders", Some(&refresh), html! { "body" }).into_string();
        assert!(html.contains(r#"content="15;url=/consumer/orders""#));
        assert!(html.contains("<title>Orders | FTGO - Food To Go</title>"));
    }

    #[test]
    fn error_box_escapes_upstream_text() {
        let html = error_box("<b>boom</b>").into_string();
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
    }
}
