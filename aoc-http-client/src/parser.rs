//! HTML response text extraction

use scraper::{Html, Selector};
use std::sync::LazyLock;

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("`main` is a valid selector"));

/// Extract the readable text of the `<main>` element of an AOC page
///
/// Answer replies are full HTML documents; the verdict sentence lives inside
/// `<main>`. Blank lines are dropped and surrounding whitespace trimmed.
/// Returns `None` when the document has no `<main>` element or it is empty.
///
/// # Example
///
/// ```
/// use aoc_http_client::extract_main_text;
///
/// let html = "<html><body><main><p>That's the right answer!</p></main></body></html>";
/// assert_eq!(extract_main_text(html).as_deref(), Some("That's the right answer!"));
/// assert_eq!(extract_main_text("plain text"), None);
/// ```
pub fn extract_main_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let main = document.select(&MAIN_SELECTOR).next()?;

    let text = main
        .text()
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!text.is_empty()).then_some(text)
}
