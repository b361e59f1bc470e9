use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names and cell cleaning
// ---------------------------------------------------------------------------

/// Header names recognised in a catalogue file.
pub mod columns {
    pub const TITLE: &str = "Book Title";
    pub const AUTHOR: &str = "Author(s)";
    pub const YEAR: &str = "Year";
    pub const PUBLICATION_DATE: &str = "Publication Date";
    pub const CATEGORY: &str = "Category";
    pub const LANGUAGE: &str = "Language";
    pub const PUBLISHER: &str = "Publisher";
    pub const BOOK_URL: &str = "Book title_URL";
    pub const AUTHOR_URL: &str = "Author_URL";
}

/// Placeholder cell values that mean "no data" (compared trimmed, lowercase).
pub const SENTINELS: [&str; 5] = ["unknown", "nan", "null", "", "none"];

/// Trim a raw cell and map sentinel placeholders to `None`.
pub fn clean_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let folded = trimmed.to_lowercase();
    if SENTINELS.contains(&folded.as_str()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric interpretation of a year cell. `"1950"` and `"1950.0"` both parse;
/// anything else (including `inf`/`NaN`) is absent rather than an error.
pub fn parse_year(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|y| y.is_finite())
}

// ---------------------------------------------------------------------------
// BookFields – the normalized source row
// ---------------------------------------------------------------------------

/// One catalogue row after sentinel cleaning. Every field is optional; the
/// columns without a dedicated slot are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub publication_date: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub publisher: Option<String>,
    pub book_url: Option<String>,
    pub author_url: Option<String>,
    /// Pass-through columns: header → cleaned value (absent values dropped).
    pub extra: BTreeMap<String, String>,
}

impl BookFields {
    /// Build from `(header, raw cell)` pairs. Cells are cleaned first, then a
    /// missing Year is back-filled from Publication Date.
    pub fn from_row<I, H, V>(row: I) -> Self
    where
        I: IntoIterator<Item = (H, V)>,
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = BookFields::default();
        for (header, raw) in row {
            let value = clean_value(raw.as_ref());
            match header.as_ref() {
                columns::TITLE => fields.title = value,
                columns::AUTHOR => fields.author = value,
                columns::YEAR => fields.year = value,
                columns::PUBLICATION_DATE => fields.publication_date = value,
                columns::CATEGORY => fields.category = value,
                columns::LANGUAGE => fields.language = value,
                columns::PUBLISHER => fields.publisher = value,
                columns::BOOK_URL => fields.book_url = value,
                columns::AUTHOR_URL => fields.author_url = value,
                other => {
                    if let Some(v) = value {
                        fields.extra.insert(other.to_string(), v);
                    }
                }
            }
        }
        if fields.year.is_none() {
            fields.year = fields.publication_date.clone();
        }
        fields
    }

    /// Look up a column by its header name.
    pub fn get(&self, column: &str) -> Option<&str> {
        let typed = match column {
            columns::TITLE => &self.title,
            columns::AUTHOR => &self.author,
            columns::YEAR => &self.year,
            columns::PUBLICATION_DATE => &self.publication_date,
            columns::CATEGORY => &self.category,
            columns::LANGUAGE => &self.language,
            columns::PUBLISHER => &self.publisher,
            columns::BOOK_URL => &self.book_url,
            columns::AUTHOR_URL => &self.author_url,
            other => return self.extra.get(other).map(String::as_str),
        };
        typed.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Book – a row plus its derived search fields
// ---------------------------------------------------------------------------

/// A catalogue record. The derived fields are computed once in [`Book::new`]
/// and the source fields are read-only afterwards, so they never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    fields: BookFields,
    year_numeric: Option<f64>,
    search_blob: String,
}

impl Book {
    pub fn new(fields: BookFields) -> Self {
        let year_numeric = fields.year.as_deref().and_then(parse_year);
        let search_blob = [
            &fields.title,
            &fields.author,
            &fields.year,
            &fields.category,
            &fields.language,
        ]
        .iter()
        .map(|f| f.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

        Book {
            fields,
            year_numeric,
            search_blob,
        }
    }

    pub fn fields(&self) -> &BookFields {
        &self.fields
    }

    pub fn year_numeric(&self) -> Option<f64> {
        self.year_numeric
    }

    /// Lowercase "title author year category language" used for free-text search.
    pub fn search_blob(&self) -> &str {
        &self.search_blob
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.fields.author.as_deref()
    }

    pub fn display_title(&self) -> &str {
        self.title().unwrap_or("Untitled")
    }

    pub fn display_author(&self) -> &str {
        self.author().unwrap_or("Unknown Author")
    }

    /// Whole-number year, or empty when unknown.
    pub fn display_year(&self) -> String {
        self.year_numeric
            .map(|y| (y as i64).to_string())
            .unwrap_or_default()
    }

    pub fn display_language(&self) -> &str {
        self.fields.language.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Facets and year bounds
// ---------------------------------------------------------------------------

/// A categorical attribute the user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Category,
    Language,
    Publisher,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Category, Facet::Language, Facet::Publisher];

    pub fn value<'a>(&self, book: &'a Book) -> Option<&'a str> {
        let f = book.fields();
        match self {
            Facet::Category => f.category.as_deref(),
            Facet::Language => f.language.as_deref(),
            Facet::Publisher => f.publisher.as_deref(),
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Facet::Category => "Categories",
            Facet::Language => "Languages",
            Facet::Publisher => "Publishers",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Category => write!(f, "Category"),
            Facet::Language => write!(f, "Language"),
            Facet::Publisher => write!(f, "Publisher"),
        }
    }
}

/// Inclusive whole-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i64,
    pub hi: i64,
}

impl YearRange {
    pub fn new(lo: i64, hi: i64) -> Self {
        YearRange { lo, hi }
    }

    pub fn contains(&self, year: f64) -> bool {
        year >= self.lo as f64 && year <= self.hi as f64
    }
}

// ---------------------------------------------------------------------------
// Catalogue – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded catalogue with pre-computed facet options. Never mutated after
/// construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalogue {
    books: Vec<Book>,
    /// Header names in file order.
    columns: Vec<String>,
    facets: BTreeMap<Facet, BTreeSet<String>>,
    year_bounds: Option<YearRange>,
}

impl Catalogue {
    /// Build facet option lists and year bounds from the loaded books.
    pub fn from_books(books: Vec<Book>, columns: Vec<String>) -> Self {
        let mut facets: BTreeMap<Facet, BTreeSet<String>> =
            Facet::ALL.iter().map(|f| (*f, BTreeSet::new())).collect();
        let mut min_year: Option<f64> = None;
        let mut max_year: Option<f64> = None;

        for book in &books {
            for facet in Facet::ALL {
                if let Some(v) = facet.value(book) {
                    facets.entry(facet).or_default().insert(v.to_string());
                }
            }
            if let Some(y) = book.year_numeric() {
                min_year = Some(min_year.map_or(y, |m| m.min(y)));
                max_year = Some(max_year.map_or(y, |m| m.max(y)));
            }
        }

        let year_bounds = match (min_year, max_year) {
            (Some(lo), Some(hi)) => Some(YearRange::new(lo as i64, hi as i64)),
            _ => None,
        };

        Catalogue {
            books,
            columns,
            facets,
            year_bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Sorted distinct non-absent values of a facet.
    pub fn facet_values(&self, facet: Facet) -> impl Iterator<Item = &str> {
        self.facets
            .get(&facet)
            .into_iter()
            .flat_map(|vals| vals.iter().map(String::as_str))
    }

    /// Dataset-wide whole-year bounds, absent when no record has a year.
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.year_bounds
    }
}
