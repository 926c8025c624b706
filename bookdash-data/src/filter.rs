//! The pure filter reducer applied on every widget change.

use crate::catalog::Book;

/// Keep the rows whose `authors` value is one of `selected_authors` and
/// whose page count does not exceed `max_pages`.
///
/// Output order matches input order (stable filter, not a sort). An empty
/// selection yields an empty result -- there is no implicit select-all.
/// Selected authors that match no row simply contribute nothing; a stale
/// persisted selection can never make this fail.
pub fn filter_books(rows: &[Book], selected_authors: &[String], max_pages: u32) -> Vec<Book> {
    rows.iter()
        .filter(|book| {
            book.num_pages <= max_pages
                && selected_authors.iter().any(|a| a == &book.authors)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, authors: &str, num_pages: u32) -> Book {
        Book {
            title: title.to_string(),
            authors: authors.to_string(),
            num_pages,
        }
    }

    fn sample_rows() -> Vec<Book> {
        vec![
            book("A1", "A", 100),
            book("B1", "B", 50),
            book("A2", "A", 250),
            book("A3", "A", 400),
            book("B2", "B", 500),
        ]
    }

    #[test]
    fn keeps_only_selected_authors_under_threshold() {
        let rows = sample_rows();
        let filtered = filter_books(&rows, &["A".to_string()], 300);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].num_pages, 100);
        assert_eq!(filtered[1].num_pages, 250);
    }

    #[test]
    fn empty_selection_yields_empty_result() {
        let rows = sample_rows();
        assert!(filter_books(&rows, &[], 10_000).is_empty());
        assert!(filter_books(&rows, &[], 0).is_empty());
    }

    #[test]
    fn preserves_source_order() {
        let rows = sample_rows();
        let filtered = filter_books(&rows, &["A".to_string(), "B".to_string()], 10_000);
        let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "B1", "A2", "A3", "B2"]);
    }

    #[test]
    fn threshold_below_all_rows_yields_empty() {
        let rows = sample_rows();
        let filtered = filter_books(&rows, &["A".to_string()], 99);
        assert!(filtered.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let rows = sample_rows();
        let filtered = filter_books(&rows, &["A".to_string()], 100);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A1");
    }

    #[test]
    fn unknown_author_contributes_zero_rows() {
        let rows = sample_rows();
        let selection = vec!["A".to_string(), "Gone From Dataset".to_string()];
        let filtered = filter_books(&rows, &selection, 10_000);
        assert_eq!(filtered.len(), 3);
    }
}
