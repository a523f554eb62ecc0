use crate::error::SiteError;
use crate::routes::Route;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(SiteError::InvalidTheme(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostMetadata {
    pub title: &'static str,
    pub description: String,
    pub route: Route,
    pub published: Date,
    pub tags: &'static [&'static str],
}

impl PostMetadata {
    pub fn path(&self) -> String {
        self.route.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Document title and description meta for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageHead {
    pub title: String,
    pub description: String,
}

/// `2025-08-01`
pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
