use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use super::model::{columns, Book, BookFields, Catalogue};
use crate::error::CatalogueError;

/// Columns every catalogue must carry (plus Year or Publication Date).
const REQUIRED_COLUMNS: [&str; 5] = [
    columns::TITLE,
    columns::AUTHOR,
    columns::CATEGORY,
    columns::LANGUAGE,
    columns::PUBLISHER,
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a book catalogue from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-delimited with a header row
/// * `.tsv` / `.tab` – tab-delimited with a header row
/// * `.txt`          – tab-delimited if the first line has a tab, else comma
/// * `.json`         – `[{ "Book Title": "...", "Year": 1950, ... }, ...]`
///
/// A file that cannot be read or parsed is an error as a whole; rows are never
/// partially recovered.
pub fn load_file(path: &Path) -> Result<Catalogue> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        "txt" => {
            let text = std::fs::read_to_string(path).context("reading catalogue")?;
            let first_line = text.lines().next().unwrap_or("");
            let delimiter = if first_line.contains('\t') { b'\t' } else { b',' };
            parse_delimited(text.as_bytes(), delimiter)
        }
        "json" => load_json(path),
        other => Err(CatalogueError::UnsupportedFormat(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<Catalogue> {
    let file = std::fs::File::open(path).context("opening catalogue")?;
    parse_delimited(file, delimiter)
}

/// Parse a header row plus records. Every row must have as many cells as the
/// header.
fn parse_delimited<R: std::io::Read>(source: R, delimiter: u8) -> Result<Catalogue> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .context("reading catalogue headers")?
        .iter()
        .map(normalize_header)
        .collect();
    check_columns(&headers)?;

    let mut books = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("catalogue row {row_no}"))?;
        let fields = BookFields::from_row(headers.iter().zip(record.iter()));
        books.push(Book::new(fields));
    }

    Ok(Catalogue::from_books(books, headers))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON: an array of flat objects, one per book.
/// The column list is every key seen across all records, in first-seen order.
fn load_json(path: &Path) -> Result<Catalogue> {
    let text = std::fs::read_to_string(path).context("reading JSON catalogue")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().ok_or(CatalogueError::NotAnArray)?;
    if records.is_empty() {
        log::warn!("JSON catalogue {} has no records", path.display());
        return Ok(Catalogue::from_books(Vec::new(), Vec::new()));
    }

    let mut headers: Vec<String> = Vec::new();
    let mut books = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or(CatalogueError::NotAnObject(i))?;
        let cells: Vec<(String, String)> = obj
            .iter()
            .map(|(k, v)| (normalize_header(k), json_to_cell(v)))
            .collect();
        for (header, _) in &cells {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
        books.push(Book::new(BookFields::from_row(cells)));
    }
    check_columns(&headers)?;

    Ok(Catalogue::from_books(books, headers))
}

fn json_to_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// -- helpers --

fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}').trim().to_string()
}

fn check_columns(headers: &[String]) -> Result<(), CatalogueError> {
    let has = |name: &str| headers.iter().any(|h| h == name);
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has(**c)) {
        return Err(CatalogueError::MissingColumn(*missing));
    }
    if !has(columns::YEAR) && !has(columns::PUBLICATION_DATE) {
        return Err(CatalogueError::MissingYearColumn);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const CSV: &str = "\u{feff}Book Title,Author(s),Year,Publication Date,Category,Language,Publisher,Book title_URL,Pages\n\
Maha Prasthanam,Sri Sri,1950,,Poetry,Telugu,Visalandhra,https://example.org/mp,120\n\
Kanyasulkam,Gurajada,unknown,1892,Drama,Telugu,unknown,,nan\n\
Untitled Notes, ,,,Misc,NULL,,,\n";

    #[test]
    fn loads_csv_and_normalizes() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "catalogue.csv", CSV);

        let cat = load_file(&path).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.columns()[0], "Book Title");

        let mp = cat.get(0).unwrap();
        assert_eq!(mp.title(), Some("Maha Prasthanam"));
        assert_eq!(mp.year_numeric(), Some(1950.0));
        assert_eq!(mp.fields().get("Pages"), Some("120"));

        let ks = cat.get(1).unwrap();
        assert_eq!(ks.fields().year.as_deref(), Some("1892"));
        assert_eq!(ks.fields().publisher, None);
        assert_eq!(ks.fields().get("Pages"), None);

        let notes = cat.get(2).unwrap();
        assert_eq!(notes.author(), None);
        assert_eq!(notes.fields().language, None);
        assert_eq!(notes.year_numeric(), None);
    }

    #[test]
    fn loads_tsv() {
        let dir = TempDir::new().unwrap();
        let tsv = "Book Title\tAuthor(s)\tYear\tCategory\tLanguage\tPublisher\n\
Veyi Padagalu\tViswanatha\t1939\tNovel\tTelugu\tUnknown\n";
        let path = write_fixture(&dir, "catalogue.tsv", tsv);
        let cat = load_file(&path).unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.get(0).unwrap().author(), Some("Viswanatha"));

        let txt = write_fixture(&dir, "catalogue.txt", tsv);
        assert_eq!(load_file(&txt).unwrap().len(), 1);
    }

    #[test]
    fn loads_json_records() {
        let dir = TempDir::new().unwrap();
        let json = r#"[
            {"Book Title": "Amuktamalyada", "Author(s)": "Krishnadevaraya", "Year": 1520,
             "Category": "Poetry", "Language": "Telugu", "Publisher": null},
            {"Book Title": "nan", "Author(s)": "x", "Publication Date": "1901.0",
             "Category": "Poetry", "Language": "Telugu", "Publisher": "none"}
        ]"#;
        let path = write_fixture(&dir, "catalogue.json", json);
        let cat = load_file(&path).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.get(0).unwrap().year_numeric(), Some(1520.0));
        assert_eq!(cat.get(0).unwrap().fields().publisher, None);
        assert_eq!(cat.get(1).unwrap().title(), None);
    }

    #[test]
    fn json_columns_keep_file_order_and_later_keys() {
        let dir = TempDir::new().unwrap();
        let json = r#"[
            {"Book Title": "Vemana Padyalu", "Author(s)": "Vemana", "Year": "1700",
             "Category": "Poetry", "Language": "Telugu", "Publisher": "Emesco"},
            {"Book Title": "Siprali", "Author(s)": "Sri Sri", "Year": "1981",
             "Category": "Poetry", "Language": "Telugu", "Publisher": "Visalandhra",
             "Shelf": "B-12"}
        ]"#;
        let path = write_fixture(&dir, "catalogue.json", json);
        let cat = load_file(&path).unwrap();
        assert_eq!(
            cat.columns(),
            [
                "Book Title",
                "Author(s)",
                "Year",
                "Category",
                "Language",
                "Publisher",
                "Shelf"
            ]
        );
        assert_eq!(cat.get(1).unwrap().fields().get("Shelf"), Some("B-12"));
        assert_eq!(
            crate::data::detail::metadata_fields(cat.get(1).unwrap(), cat.columns()),
            vec![
                ("Category", "Poetry"),
                ("Language", "Telugu"),
                ("Publisher", "Visalandhra"),
                ("Shelf", "B-12")
            ]
        );
    }

    #[test]
    fn empty_json_array_loads_no_books() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.json", "[]");
        assert!(load_file(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_columns_are_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "a.csv", "Book Title,Author(s),Year,Category,Language\nA,B,1,C,D\n");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Publisher"), "{err:#}");

        let path = write_fixture(
            &dir,
            "b.csv",
            "Book Title,Author(s),Category,Language,Publisher\nA,B,C,D,E\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogueError>(),
            Some(CatalogueError::MissingYearColumn)
        ));
    }

    #[test]
    fn malformed_rows_fail_the_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "ragged.csv",
            "Book Title,Author(s),Year,Category,Language,Publisher\nA,B,1950,C,D,E\nonly,three,cells\n",
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unreadable_or_unknown_files_fail() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(&dir.path().join("missing.csv")).is_err());

        let path = write_fixture(&dir, "catalogue.xlsx", "");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogueError>(),
            Some(CatalogueError::UnsupportedFormat(_))
        ));
    }
}
