use std::collections::{BTreeMap, BTreeSet};

use super::model::{Book, Catalogue, Facet, YearRange};

// ---------------------------------------------------------------------------
// Filter predicates: free text, facet selections, year range
// ---------------------------------------------------------------------------

/// Everything the user has chosen to narrow the catalogue with.
///
/// An empty facet set means "no restriction" for that facet. `years` is the
/// slider position; it only filters when it differs from `full_years`, the
/// bounds of the whole dataset captured when the state was created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub facets: BTreeMap<Facet, BTreeSet<String>>,
    pub years: Option<YearRange>,
    pub full_years: Option<YearRange>,
}

impl FilterState {
    /// Initialise with nothing selected and the year range at full width.
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        FilterState {
            query: String::new(),
            facets: BTreeMap::new(),
            years: catalogue.year_bounds(),
            full_years: catalogue.year_bounds(),
        }
    }

    pub fn selected(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.facets.get(&facet)
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).is_some_and(|s| s.contains(value))
    }
}

/// Return indices (in catalogue order) of books that pass every active filter.
///
/// Predicates, all ANDed:
/// * query: case-insensitive substring of the book's search blob; blank → pass
/// * facets: value is in the selected set; empty set → pass
/// * years: `years` within the range, unknown years excluded. Skipped entirely
///   when the range equals `full_years` (or the dataset has no years), so
///   unknown years are kept. Re-filtering a subset therefore gives the same
///   answer as the first pass.
pub fn filtered_indices(catalogue: &Catalogue, filters: &FilterState) -> Vec<usize> {
    let query = filters.query.trim().to_lowercase();
    let year_range = filters
        .years
        .filter(|r| filters.full_years.is_some_and(|full| *r != full));

    catalogue
        .books()
        .iter()
        .enumerate()
        .filter(|(_, book)| {
            matches_query(book, &query)
                && matches_facets(book, &filters.facets)
                && year_range.map_or(true, |r| matches_years(book, r))
        })
        .map(|(i, _)| i)
        .collect()
}

fn matches_query(book: &Book, query: &str) -> bool {
    query.is_empty() || book.search_blob().contains(query)
}

fn matches_facets(book: &Book, facets: &BTreeMap<Facet, BTreeSet<String>>) -> bool {
    facets.iter().all(|(facet, selected)| {
        selected.is_empty() || facet.value(book).is_some_and(|v| selected.contains(v))
    })
}

fn matches_years(book: &Book, range: YearRange) -> bool {
    book.year_numeric().is_some_and(|y| range.contains(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BookFields;

    fn book(title: &str, year: &str, category: &str, language: &str) -> Book {
        Book::new(BookFields::from_row([
            ("Book Title", title),
            ("Author(s)", "Sri Sri"),
            ("Year", year),
            ("Category", category),
            ("Language", language),
        ]))
    }

    fn sample() -> Catalogue {
        Catalogue::from_books(
            vec![
                book("Maha Prasthanam", "1950", "Poetry", "Telugu"),
                book("Siprali", "1900", "Poetry", "Telugu"),
                book("Khadga Srushti", "unknown", "Poetry", "Telugu"),
                book("Charama Ratri", "2000", "Stories", "English"),
                book("Anantham", "1986", "Autobiography", "nan"),
            ],
            vec![],
        )
    }

    #[test]
    fn default_state_passes_everything() {
        let cat = sample();
        let filters = FilterState::for_catalogue(&cat);
        assert_eq!(filtered_indices(&cat, &filters), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters.query = "  PRASTH ".into();
        assert_eq!(filtered_indices(&cat, &filters), vec![0]);

        filters.query = "1950".into();
        assert_eq!(filtered_indices(&cat, &filters), vec![0]);

        filters.query = "english".into();
        assert_eq!(filtered_indices(&cat, &filters), vec![3]);
    }

    #[test]
    fn empty_facet_selection_is_no_op() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters.facets.insert(Facet::Category, BTreeSet::new());
        assert_eq!(filtered_indices(&cat, &filters).len(), 5);
    }

    #[test]
    fn facets_and_compose() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters
            .facets
            .insert(Facet::Category, ["Poetry".to_string(), "Stories".to_string()].into());
        assert_eq!(filtered_indices(&cat, &filters), vec![0, 1, 2, 3]);

        filters
            .facets
            .insert(Facet::Language, ["English".to_string()].into());
        assert_eq!(filtered_indices(&cat, &filters), vec![3]);
    }

    #[test]
    fn absent_facet_value_fails_non_empty_selection() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters
            .facets
            .insert(Facet::Language, ["Telugu".to_string()].into());
        assert!(!filtered_indices(&cat, &filters).contains(&4));
    }

    #[test]
    fn full_year_range_keeps_unknown_years() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        assert_eq!(filters.years, Some(YearRange::new(1900, 2000)));
        assert!(filtered_indices(&cat, &filters).contains(&2));

        filters.years = Some(YearRange::new(1950, 2000));
        assert_eq!(filtered_indices(&cat, &filters), vec![0, 3, 4]);

        filters.years = Some(YearRange::new(1900, 1999));
        assert!(!filtered_indices(&cat, &filters).contains(&2));
    }

    #[test]
    fn narrowed_years_drop_unknown_even_when_query_matches() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters.query = "khadga".into();
        assert_eq!(filtered_indices(&cat, &filters), vec![2]);

        filters.years = Some(YearRange::new(1950, 2000));
        assert!(filtered_indices(&cat, &filters).is_empty());
    }

    /// Filter `cat` with `filters`, then filter the resulting subset again and
    /// map the second pass back to indices of `cat`.
    fn filter_twice(cat: &Catalogue, filters: &FilterState) -> (Vec<usize>, Vec<usize>) {
        let once = filtered_indices(cat, filters);
        let subset: Vec<Book> = once.iter().map(|&i| cat.books()[i].clone()).collect();
        let narrowed = Catalogue::from_books(subset, vec![]);
        let twice = filtered_indices(&narrowed, filters)
            .into_iter()
            .map(|j| once[j])
            .collect();
        (once, twice)
    }

    fn atlases() -> Catalogue {
        Catalogue::from_books(
            vec![
                book("Atlas", "1900", "Maps", "Telugu"),
                book("Atlas B", "1950", "Maps", "Telugu"),
                book("Atlas C", "unknown", "Maps", "Telugu"),
                book("Zed", "2000", "Maps", "Telugu"),
            ],
            vec![],
        )
    }

    #[test]
    fn refiltering_at_full_range_keeps_unknown_years() {
        let cat = atlases();
        let mut filters = FilterState::for_catalogue(&cat);
        filters.query = "atlas".into();

        // The subset's own bounds are 1900..1950, narrower than the dataset's.
        let (once, twice) = filter_twice(&cat, &filters);
        assert_eq!(once, vec![0, 1, 2]);
        assert_eq!(twice, once);
    }

    #[test]
    fn refiltering_a_narrowed_range_is_stable() {
        let cat = sample();
        let mut filters = FilterState::for_catalogue(&cat);
        filters.query = "a".into();
        filters.years = Some(YearRange::new(1950, 2000));

        let (once, twice) = filter_twice(&cat, &filters);
        assert_eq!(once, vec![0, 3, 4]);
        assert_eq!(twice, once);
    }

    #[test]
    fn no_year_bounds_never_filters_by_year() {
        let cat = Catalogue::from_books(vec![book("A", "", "X", "Y")], vec![]);
        let mut filters = FilterState::for_catalogue(&cat);
        filters.years = Some(YearRange::new(1950, 2000));
        assert_eq!(filtered_indices(&cat, &filters), vec![0]);
    }
}
