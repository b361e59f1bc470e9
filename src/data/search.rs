use super::filter::{filtered_indices, FilterState};
use super::model::Catalogue;
use super::page::{clamp_page, page_slice, total_pages};
use super::sort::{sort_indices, SortMode};

/// One full interaction's worth of user intent.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub filters: FilterState,
    pub sort: SortMode,
    /// Requested 1-based page; clamped before slicing.
    pub page: usize,
}

impl SearchRequest {
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        SearchRequest {
            filters: FilterState::for_catalogue(catalogue),
            sort: SortMode::default(),
            page: 1,
        }
    }
}

/// What the presentation layer renders for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    /// Number of books passing the filters.
    pub matched: usize,
    /// The page actually shown (the clamped request), to be stored back as
    /// session state.
    pub page: usize,
    pub total_pages: usize,
    /// Catalogue indices of the books on `page`, in display order.
    pub items: Vec<usize>,
}

/// Filter → sort → paginate. Pure: the same catalogue and request always give
/// the same results.
pub fn search(catalogue: &Catalogue, request: &SearchRequest) -> SearchResults {
    let mut indices = filtered_indices(catalogue, &request.filters);
    sort_indices(catalogue, &mut indices, request.sort);

    let matched = indices.len();
    let page = clamp_page(request.page, matched);
    let items = page_slice(&indices, page).to_vec();

    log::debug!(
        "search '{}' ({}) → {matched} matches, page {page}",
        request.filters.query,
        request.sort
    );

    SearchResults {
        matched,
        page,
        total_pages: total_pages(matched),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Book, BookFields, YearRange};

    fn catalogue_of(titles_years: Vec<(String, String)>) -> Catalogue {
        let books = titles_years
            .iter()
            .map(|(t, y)| {
                Book::new(BookFields::from_row([
                    ("Book Title", t.as_str()),
                    ("Author(s)", "Anon"),
                    ("Year", y.as_str()),
                ]))
            })
            .collect();
        Catalogue::from_books(books, vec![])
    }

    /// 25 books titled "Book 00".."Book 24", stored in reverse order.
    fn twenty_five() -> Catalogue {
        catalogue_of(
            (0..25)
                .rev()
                .map(|i| (format!("Book {i:02}"), format!("{}", 1900 + i * 4)))
                .collect(),
        )
    }

    fn titles(cat: &Catalogue, items: &[usize]) -> Vec<String> {
        items
            .iter()
            .map(|&i| cat.books()[i].display_title().to_string())
            .collect()
    }

    #[test]
    fn title_sort_pages_of_twenty() {
        let cat = twenty_five();
        let mut req = SearchRequest::for_catalogue(&cat);
        req.sort = SortMode::TitleAsc;

        let first = search(&cat, &req);
        assert_eq!(first.matched, 25);
        assert_eq!(first.total_pages, 2);
        let expected: Vec<String> = (0..20).map(|i| format!("Book {i:02}")).collect();
        assert_eq!(titles(&cat, &first.items), expected);

        req.page = 2;
        let second = search(&cat, &req);
        let expected: Vec<String> = (20..25).map(|i| format!("Book {i:02}")).collect();
        assert_eq!(titles(&cat, &second.items), expected);
    }

    #[test]
    fn year_query_matches_blob() {
        let cat = catalogue_of(vec![
            ("Prabandham".into(), "1950".into()),
            ("Songs of 1950".into(), "1961".into()),
            ("Later".into(), "1970".into()),
        ]);
        let mut req = SearchRequest::for_catalogue(&cat);
        req.filters.query = "1950".into();
        let res = search(&cat, &req);
        assert_eq!(res.items, vec![0, 1]);
    }

    #[test]
    fn narrowed_slider_drops_unknown_years() {
        let cat = catalogue_of(vec![
            ("Atlas".into(), "1900".into()),
            ("Atlas of Andhra".into(), "unknown".into()),
            ("Atlas Revised".into(), "1960".into()),
            ("Modern Atlas".into(), "2000".into()),
        ]);
        let mut req = SearchRequest::for_catalogue(&cat);
        req.filters.query = "atlas".into();
        assert_eq!(search(&cat, &req).matched, 4);

        req.filters.years = Some(YearRange::new(1950, 2000));
        let res = search(&cat, &req);
        assert_eq!(res.items, vec![2, 3]);
    }

    #[test]
    fn page_is_clamped_when_results_shrink() {
        let cat = twenty_five();
        let mut req = SearchRequest::for_catalogue(&cat);
        req.page = 2;
        assert_eq!(search(&cat, &req).items.len(), 5);

        req.filters.query = "book 0".into();
        let res = search(&cat, &req);
        assert_eq!(res.matched, 10);
        assert_eq!(res.page, 1);
        assert_eq!(res.items.len(), 10);
    }

    #[test]
    fn empty_result_is_page_one_of_zero() {
        let cat = twenty_five();
        let mut req = SearchRequest::for_catalogue(&cat);
        req.filters.query = "no such book".into();
        req.page = 3;
        let res = search(&cat, &req);
        assert_eq!(res, SearchResults { matched: 0, page: 1, total_pages: 0, items: vec![] });
    }
}
