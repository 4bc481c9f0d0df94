use daypage_core::PageConfig;
use hypertext::{prelude::*, Raw};

/// Page shell: static header above the weather card and the task editor
pub fn render_page(page: &PageConfig, weather_html: &str, tasks_html: &str) -> String {
    maud! {
        !DOCTYPE
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                link rel="stylesheet" href="/static/page.css";
            }
            body {
                div .page {
                    header .page-header {
                        h1 { (page.title) }
                        p .subtitle { (page.subtitle) }
                    }
                    (Raw::dangerously_create(weather_html))
                    (Raw::dangerously_create(tasks_html))
                }
            }
        }
    }
    .render()
    .into_inner()
}
