use crate::config::config;
use crate::content;
use crate::routes::Route;
use crate::types::{ExperienceEntry, PostMetadata, iso_date};
use dioxus::prelude::*;

const ABOUT: &str = "🇸🇬 Software engineer building robust, scalable infrastructure for deploying Large Language Models (LLMs) in enterprise environments. My recent work spans NLP applications, MLOps, LLM orchestration, and data pipeline automation. Off hours, I contribute to open-source projects, enjoy reading philosophy, and deepen my Anapānasati meditation practice.";

/// One row of the "Newest Posts" grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PostEntry {
    pub route: Route,
    pub href: String,
    pub title: &'static str,
    pub date: String,
    pub summary: String,
}

pub fn post_entries(posts: &[PostMetadata]) -> Vec<PostEntry> {
    posts
        .iter()
        .map(|post| PostEntry {
            route: post.route.clone(),
            href: post.path(),
            title: post.title,
            date: iso_date(post.published),
            summary: post.description.clone(),
        })
        .collect()
}

fn post_card_class(hovered: Option<usize>, index: usize) -> &'static str {
    if hovered == Some(index) {
        "post-card hovered"
    } else {
        "post-card"
    }
}

/// Route target for `/`.
#[component]
pub fn Home() -> Element {
    rsx! {
        HomePage {
            greeting: content::greeting(),
            posts: content::posts().to_vec(),
            experience: content::EXPERIENCE,
        }
    }
}

#[component]
pub fn HomePage(
    greeting: &'static str,
    posts: Vec<PostMetadata>,
    experience: &'static [ExperienceEntry],
) -> Element {
    let site = config();
    rsx! {
        Hero { greeting, cover: site.asset_url("home.jpg") }
        section { class: "home-sections",
            div { class: "home-row",
                h2 { class: "section-title", "About" }
                div { class: "about",
                    img {
                        class: "about-portrait",
                        src: site.asset_url("profile.jpg"),
                        alt: "Ming Jie Wong",
                        width: "120",
                        height: "120",
                    }
                    p { class: "about-text", {ABOUT} }
                }
            }
            div { class: "home-row",
                h2 { class: "section-title", "Latest Experience" }
                ExperienceList { entries: experience }
            }
            div { class: "home-row",
                h2 { class: "section-title", "Newest Posts" }
                PostGrid { entries: post_entries(&posts) }
            }
        }
    }
}

#[component]
fn Hero(greeting: &'static str, cover: String) -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title text-strong",
                span { "{greeting}, I'm Ming Jie" }
                " 👋🏽"
            }
            p { class: "hero-tagline",
                "Cloud-Native Developer • AI Platform & Applications Engineer • 🇸🇬"
            }
            img {
                class: "hero-cover",
                src: cover,
                alt: "Cover",
                width: "1280",
                height: "720",
            }
        }
    }
}

#[component]
fn ExperienceList(entries: &'static [ExperienceEntry]) -> Element {
    rsx! {
        div { class: "experience-list",
            for (idx, entry) in entries.iter().enumerate() {
                div { key: "{idx}", class: "experience",
                    div { class: "experience-head",
                        h3 { "{entry.role}" }
                        p { class: "experience-period", "{entry.period}" }
                    }
                    p { class: "experience-org", "{entry.organization}" }
                    p { class: "experience-desc", "{entry.description}" }
                }
            }
        }
    }
}

#[component]
fn PostGrid(entries: Vec<PostEntry>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    rsx! {
        div { class: "post-grid",
            for (idx, entry) in entries.into_iter().enumerate() {
                div {
                    key: "{entry.href}",
                    class: post_card_class(hovered(), idx),
                    onmouseenter: move |_| hovered.set(Some(idx)),
                    onmouseleave: move |_| hovered.set(None),
                    Link { class: "post-link", to: entry.route.clone(),
                        div { class: "post-date",
                            span { class: "post-date-icon", aria_hidden: "true", "📅" }
                            span { "{entry.date}" }
                        }
                        h3 { class: "post-title", "{entry.title}" }
                        p { class: "post-summary", "{entry.summary}" }
                    }
                }
            }
        }
    }
}
