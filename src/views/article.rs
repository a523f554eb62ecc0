use crate::config::config;
use crate::content::{self, ECOLOGIST_PREVIEW};
use crate::diagram::{DIAGRAM_BACKGROUND, PlatformSurface, use_diagram_watch};
use crate::routes::Route;
use crate::types::{PostMetadata, iso_date};
use crate::views::layout::PageLayout;
use crate::views::shared::{byline_date, render_article};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde_json::{Value, json};

const AUTHOR: &str = "Ming Jie Wong";
const ECOLOGIST_MD: &str = include_str!("../../content/ecologist-ai.md");

static ECOLOGIST_HTML: Lazy<String> =
    Lazy::new(|| render_article(ECOLOGIST_MD, &config().base_path, ECOLOGIST_PREVIEW));

/// Loads mermaid from `module_url` and renders every `.mermaid` block.
fn mermaid_init_script(module_url: &str) -> String {
    let module_url = serde_json::to_string(module_url).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
const {{ default: mermaid }} = await import({module_url});
mermaid.initialize({{
    startOnLoad: false,
    theme: "default",
    themeVariables: {{ background: "{background}" }},
}});
await mermaid.run({{ querySelector: ".mermaid" }});
return true;
"#,
        module_url = module_url,
        background = DIAGRAM_BACKGROUND,
    )
}

/// schema.org `BlogPosting` for the post, embedded as JSON-LD.
pub fn structured_data(post: &PostMetadata) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.description,
        "datePublished": iso_date(post.published),
        "author": { "@type": "Person", "name": AUTHOR },
        "keywords": post.tags.join(", "),
        "url": post.path(),
    })
}

/// Runs mermaid once the article is on screen and keeps a mutation watch on
/// the page for as long as the component is mounted.
fn use_diagrams() {
    use_diagram_watch(|| PlatformSurface);

    use_effect(|| {
        let script = mermaid_init_script(&config().mermaid_url);
        spawn(async move {
            match document::eval(&script).await {
                Ok(_) => tracing::debug!("mermaid diagrams rendered"),
                Err(err) => tracing::warn!(?err, "mermaid rendering failed"),
            }
        });
    });
}

#[component]
pub fn EcologistPost() -> Element {
    use_diagrams();

    let Some(post) = content::find_post(&Route::EcologistPost {}) else {
        return rsx! {};
    };
    let ld_json = structured_data(post).to_string();
    let updated = byline_date(post.published);
    let body = ECOLOGIST_HTML.as_str();

    rsx! {
        script { r#type: "application/ld+json", dangerous_inner_html: "{ld_json}" }
        PageLayout { show_back_link: true, class: "article-page",
            article { class: "prose",
                h1 { class: "text-strong", "{post.title}" }
                p { class: "byline",
                    "by {AUTHOR} · Updated: {updated}"
                }
                div { class: "article-body", dangerous_inner_html: body }
            }
        }
    }
}
