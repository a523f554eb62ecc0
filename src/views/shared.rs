use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

pub const BYLINE_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

const CODE_THEME: &str = "InspiredGitHub";

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    // figures, diagrams and collapsible code blocks are raw HTML
    options.render.unsafe_ = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some(CODE_THEME));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Fill `{{base}}` and `{{preview}}` in an article template, then render it.
pub fn render_article(template: &str, base_path: &str, preview: &str) -> String {
    let md = template
        .replace("{{base}}", base_path)
        .replace("{{preview}}", preview);
    markdown_to_html(&md)
}

/// `Aug 01, 2025`
pub fn byline_date(date: Date) -> String {
    date.format(BYLINE_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
