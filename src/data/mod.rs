/// Data layer: catalogue types, loading, and the search pipeline.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .txt / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, clean sentinels → Catalogue
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  Catalogue    │  Vec<Book>, facet options, year bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  filter → sort → page → SearchResults
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  detail   │  links + metadata for the selected book
///   └──────────┘
/// ```

pub mod detail;
pub mod filter;
pub mod loader;
pub mod model;
pub mod page;
pub mod search;
pub mod sort;
