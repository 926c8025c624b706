//! CSV parsing into the immutable in-memory book catalog.
//!
//! The raw source is the public books dataset whose page-count column is
//! labelled with irregular leading spaces (`  num_pages`). Columns are
//! therefore resolved by trimmed, case-insensitive header match rather
//! than by exact string.
//!
//! # CSV Format
//!
//! With headers; only three columns are required, any others are ignored:
//! `title` (text), `authors` (text, possibly a joined multi-author string),
//! `num_pages` (non-negative integer).

use crate::error::{LoadError, Result};
use serde::Serialize;

/// A single book row. Immutable once loaded.
///
/// `authors` is kept verbatim from the source -- multi-author entries
/// arrive as one joined string and are matched as such by the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub authors: String,
    pub num_pages: u32,
}

/// The full loaded dataset plus the facts derived from it for widget bounds.
///
/// Loaded exactly once per app lifetime and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    /// Parse CSV text into a catalog, reading at most `row_limit` source
    /// rows (the window is over data rows read, not books kept).
    ///
    /// Rows with an unparseable page count or an empty title/authors field
    /// are skipped (the raw dataset contains a handful of ragged rows), so
    /// the catalog may hold fewer than `row_limit` books. Missing required
    /// columns or an entirely empty result are fatal.
    pub fn from_csv(csv_data: &str, row_limit: usize) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let column = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(LoadError::MissingColumn(name))
        };
        let title_col = column("title")?;
        let authors_col = column("authors")?;
        let pages_col = column("num_pages")?;

        let mut books = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records().take(row_limit) {
            let record = match result {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            let title = record.get(title_col).unwrap_or("").trim();
            let authors = record.get(authors_col).unwrap_or("").trim();
            let pages = record.get(pages_col).unwrap_or("").trim();

            if title.is_empty() || authors.is_empty() {
                skipped += 1;
                continue;
            }
            match pages.parse::<u32>() {
                Ok(num_pages) => books.push(Book {
                    title: title.to_string(),
                    authors: authors.to_string(),
                    num_pages,
                }),
                Err(_) => skipped += 1,
            }
        }

        if books.is_empty() {
            return Err(LoadError::NoRows);
        }
        log::info!(
            "catalog: loaded {} books ({} rows skipped)",
            books.len(),
            skipped
        );
        Ok(Self { books })
    }

    /// All loaded rows, in source order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Distinct author values in first-appearance order, for the selector.
    pub fn authors(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for book in &self.books {
            if !seen.iter().any(|a| a == &book.authors) {
                seen.push(book.authors.clone());
            }
        }
        seen
    }

    /// The largest page count in the catalog, for bounding the slider.
    pub fn max_pages(&self) -> u32 {
        self.books.iter().map(|b| b.num_pages).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
bookID,title,authors,average_rating,  num_pages
1,Dune,Frank Herbert,4.2,412
2,Hyperion,Dan Simmons,4.2,482
3,Endymion,Dan Simmons,4.0,563
";

    #[test]
    fn parses_rows_and_derives_bounds() {
        let catalog = BookCatalog::from_csv(SAMPLE_CSV, 1000).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.books()[0].title, "Dune");
        assert_eq!(catalog.books()[0].num_pages, 412);
        assert_eq!(catalog.max_pages(), 563);
    }

    #[test]
    fn resolves_irregularly_spaced_header() {
        // "  num_pages" above must bind; a cleanly named header must too.
        let clean = "title,authors,num_pages\nDune,Frank Herbert,412\n";
        let catalog = BookCatalog::from_csv(clean, 1000).unwrap();
        assert_eq!(catalog.books()[0].num_pages, 412);
    }

    #[test]
    fn authors_are_distinct_in_first_appearance_order() {
        let catalog = BookCatalog::from_csv(SAMPLE_CSV, 1000).unwrap();
        assert_eq!(
            catalog.authors(),
            vec!["Frank Herbert".to_string(), "Dan Simmons".to_string()]
        );
    }

    #[test]
    fn honors_row_limit() {
        let catalog = BookCatalog::from_csv(SAMPLE_CSV, 2).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.max_pages(), 482);
    }

    #[test]
    fn row_limit_counts_source_rows_not_kept_books() {
        // A ragged row inside the window must consume a slot: the limit
        // bounds the data rows read, so the row beyond it stays out even
        // though fewer books were kept.
        let csv_data = "\
title,authors,num_pages
First,Frank Herbert,412
Broken,Nobody,not-a-number
Third,Dan Simmons,482
";
        let catalog = BookCatalog::from_csv(csv_data, 2).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "First");
    }

    #[test]
    fn skips_ragged_rows() {
        let csv_data = "\
title,authors,num_pages
Dune,Frank Herbert,412
Broken,Nobody,not-a-number
,Dan Simmons,482
Hyperion,Dan Simmons,482
";
        let catalog = BookCatalog::from_csv(csv_data, 1000).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books()[1].title, "Hyperion");
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv_data = "title,authors\nDune,Frank Herbert\n";
        match BookCatalog::from_csv(csv_data, 1000) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "num_pages"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn empty_source_is_fatal() {
        let csv_data = "title,authors,num_pages\n";
        assert!(matches!(
            BookCatalog::from_csv(csv_data, 1000),
            Err(LoadError::NoRows)
        ));
    }
}
