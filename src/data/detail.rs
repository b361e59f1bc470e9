use super::model::{columns, Book};

/// Columns left out of the detail view's metadata list: they are shown
/// elsewhere in the view, are links, or are internal identifiers.
const METADATA_SKIP: [&str; 11] = [
    columns::TITLE,
    columns::AUTHOR,
    columns::YEAR,
    columns::BOOK_URL,
    columns::AUTHOR_URL,
    "URL",
    "Url",
    "Link",
    "link",
    "Book title",
    "Book id",
];

const WEB_SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// Where the detail view's main button points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyLink {
    /// The record carries its own resource URL.
    DigitalCopy(String),
    /// No usable URL; a web search for title and author.
    WebSearch(String),
    /// No title to search for either.
    LibraryOnly,
}

/// A link counts only if it looks like a web address.
pub fn is_well_formed(url: &str) -> bool {
    url.starts_with("http") || url.starts_with("www")
}

/// Prefer the explicit resource URL, else a web search, else nothing.
pub fn copy_link(book: &Book) -> CopyLink {
    if let Some(url) = book.fields().book_url.as_deref().filter(|u| is_well_formed(u)) {
        return CopyLink::DigitalCopy(url.to_string());
    }
    match book.title() {
        Some(title) => {
            let query = format!("{} {}", title, book.author().unwrap_or(""));
            let query = query.trim();
            CopyLink::WebSearch(format!("{WEB_SEARCH_BASE}{}", urlencoding::encode(query)))
        }
        None => CopyLink::LibraryOnly,
    }
}

/// Optional author profile link, independent of [`copy_link`].
pub fn author_profile(book: &Book) -> Option<&str> {
    book.fields()
        .author_url
        .as_deref()
        .filter(|u| is_well_formed(u))
}

/// `(column, value)` pairs for the metadata section, in file column order.
pub fn metadata_fields<'a>(book: &'a Book, columns: &'a [String]) -> Vec<(&'a str, &'a str)> {
    columns
        .iter()
        .map(String::as_str)
        .filter(|c| !METADATA_SKIP.contains(c))
        .filter_map(|c| book.fields().get(c).map(|v| (c, v)))
        .collect()
}
