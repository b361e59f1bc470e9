use std::cmp::Ordering;
use std::fmt;

use super::model::Catalogue;

/// Result ordering offered in the sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Catalogue order; no score is computed.
    #[default]
    Relevance,
    YearNewest,
    YearOldest,
    TitleAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Relevance,
        SortMode::YearNewest,
        SortMode::YearOldest,
        SortMode::TitleAsc,
    ];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Relevance => "Relevance",
            SortMode::YearNewest => "Year (Newest)",
            SortMode::YearOldest => "Year (Oldest)",
            SortMode::TitleAsc => "Title (A-Z)",
        };
        f.write_str(label)
    }
}

/// Stable in-place sort of catalogue indices. Unknown years go last in both
/// year directions; a missing title compares as the empty string.
pub fn sort_indices(catalogue: &Catalogue, indices: &mut [usize], mode: SortMode) {
    let books = catalogue.books();
    match mode {
        SortMode::Relevance => {}
        SortMode::YearNewest => indices.sort_by(|&a, &b| {
            cmp_years(books[a].year_numeric(), books[b].year_numeric(), true)
        }),
        SortMode::YearOldest => indices.sort_by(|&a, &b| {
            cmp_years(books[a].year_numeric(), books[b].year_numeric(), false)
        }),
        SortMode::TitleAsc => indices.sort_by(|&a, &b| {
            let ta = books[a].title().unwrap_or("");
            let tb = books[b].title().unwrap_or("");
            ta.cmp(tb)
        }),
    }
}

fn cmp_years(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.total_cmp(&y);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
