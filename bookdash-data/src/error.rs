/// Error types for catalog loading.
use thiserror::Error;

/// Fatal errors while loading the book catalog at startup.
///
/// Any of these prevents the dashboard session from starting: without a
/// parsed catalog there are no widget bounds to derive.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The remote CSV source was unreachable or returned a non-success status
    #[error("failed to fetch book data: {0}")]
    Fetch(String),

    /// The CSV stream itself was malformed beyond recovery
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("required column not found in source: {0}")]
    MissingColumn(&'static str),

    /// The source parsed but yielded no usable rows
    #[error("no usable book rows in source")]
    NoRows,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    // The fetch wrapper in the UI crate wraps every transport failure in
    // this variant; the app shows the Display text verbatim.
    #[test]
    fn fetch_error_displays_the_transport_detail() {
        let err = LoadError::Fetch("HTTP 503 fetching https://example.com/books.csv".to_string());
        assert_eq!(
            err.to_string(),
            "failed to fetch book data: HTTP 503 fetching https://example.com/books.csv"
        );
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = LoadError::MissingColumn("num_pages");
        assert_eq!(err.to_string(), "required column not found in source: num_pages");
    }
}
