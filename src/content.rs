//! Static site content: greetings, experience and post metadata.

use crate::routes::Route;
use crate::types::{ExperienceEntry, PageHead, PostMetadata};
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use time::macros::date;

pub const SITE_TITLE: &str = "Ming Jie Wong";
pub const SITE_DESCRIPTION: &str = "Ming Jie Wong: software engineer building infrastructure for deploying LLMs, with notes on MLOps, NLP and serverless AI.";

pub const GREETINGS: &[&str] = &[
    "Hej",
    "Hello",
    "Hola",
    "Bonjour",
    "Ciao",
    "こんにちは",
    "안녕하세요",
    "你好",
    "नमस्ते",
    "வணக்கம்",
];

/// Word limit for post summaries on the home page.
pub const SUMMARY_WORDS: usize = 50;

pub const ECOLOGIST_PREVIEW: &str = concat!(
    "In this post, we show how to build a serverless wildlife image search application ",
    "that helps users identify flora and fauna in Southeast Asia. By combining BioCLIP ",
    "embeddings, MongoDB Atlas' vector search, and a serverless backend powered by ",
    "AWS Lambda and API Gateway, this architecture supports real-time image queries ",
    "and returns the 5 closest scientific matches from a curated dataset."
);

pub const ECOLOGIST_TITLE: &str = "Building an AI-Powered Wildlife Identifier for Southeast Asia Using BioCLIP, MongoDB Atlas, and Serverless Infrastructure";

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Data Scientist",
        organization: "Volvo Cars Tech Hub Singapore",
        period: "2025 - Present",
        description: "Focused on deploying self-hosted LLMs and building MLOps infrastructure for orchestrating internal AI workflows and data pipelines.",
    },
    ExperienceEntry {
        role: "Data Scientist",
        organization: "Singapore Press Holdings (SPH) Media",
        period: "2021 - 2024",
        description: "Developed and productionized NLP systems for article summarization, tagging, and personalized recommendations across major publications.",
    },
];

static POSTS: Lazy<Vec<PostMetadata>> = Lazy::new(|| {
    vec![PostMetadata {
        title: ECOLOGIST_TITLE,
        description: truncate_words(ECOLOGIST_PREVIEW, SUMMARY_WORDS),
        route: Route::EcologistPost {},
        published: date!(2025 - 08 - 01),
        tags: &["AI", "Computer Vision", "Serverless", "Terraform"],
    }]
});

static GREETING: Lazy<&'static str> = Lazy::new(|| {
    let greeting = pick_greeting(&mut rand::thread_rng());
    tracing::debug!(greeting, "greeting chosen");
    greeting
});

pub fn posts() -> &'static [PostMetadata] {
    &POSTS
}

pub fn find_post(route: &Route) -> Option<&'static PostMetadata> {
    posts().iter().find(|post| &post.route == route)
}

/// Greeting for this session. Chosen on first call, fixed afterwards.
pub fn greeting() -> &'static str {
    *GREETING
}

pub fn pick_greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or("Hello")
}

/// Keep the first `limit` space-separated words, appending `[...]` only when
/// something was cut.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > limit {
        format!("{}[...]", words[..limit].join(" "))
    } else {
        text.to_string()
    }
}

/// Title and description for a route. Posts use their own metadata; every
/// other route, including unmatched ones, gets the site defaults.
pub fn page_head(route: &Route) -> PageHead {
    match find_post(route) {
        Some(post) => PageHead {
            title: post.title.to_string(),
            description: post.description.clone(),
        },
        None => PageHead {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
        },
    }
}
