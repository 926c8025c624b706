//! Bar chart specification builder.
//!
//! [`ChartSpec::build`] is a pure function from the filtered rows and the
//! current widget values to a complete chart description: one bar per row,
//! fixed axis captions, a contextual title, and a light/dark visual
//! variant. The spec serializes to the JSON shape consumed by the D3
//! bar-chart script; each recompute produces a fresh spec that fully
//! replaces the previous one.

use bookdash_data::Book;
use serde::Serialize;

/// Fixed axis captions, independent of data content.
pub const X_AXIS_LABEL: &str = "Book title";
pub const Y_AXIS_LABEL: &str = "Number of pages";

/// Visual variant applied to the chart, chosen from the theme switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartTheme {
    Light,
    Dark,
}

impl ChartTheme {
    /// Deterministic mapping from the switch value: true is dark.
    pub fn from_switch(dark: bool) -> Self {
        if dark {
            ChartTheme::Dark
        } else {
            ChartTheme::Light
        }
    }
}

/// One bar: x = book title, y = page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub title: String,
    pub pages: u32,
}

/// A complete, self-contained chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub bars: Vec<Bar>,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub theme: ChartTheme,
}

impl ChartSpec {
    /// Build a chart spec from the filtered rows and the widget values.
    ///
    /// `selected_authors` and `max_pages` only feed the contextual title
    /// string; the bars come from `filtered` alone. Empty input is fine
    /// and produces a well-formed zero-bar spec.
    pub fn build(
        filtered: &[Book],
        selected_authors: &[String],
        max_pages: u32,
        dark: bool,
    ) -> Self {
        let bars = filtered
            .iter()
            .map(|book| Bar {
                title: book.title.clone(),
                pages: book.num_pages,
            })
            .collect();

        let authors_label = if selected_authors.is_empty() {
            "none".to_string()
        } else {
            selected_authors.join(", ")
        };

        ChartSpec {
            bars,
            title: format!(
                "Pages per book up to {} pages (authors: {})",
                max_pages, authors_label
            ),
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            theme: ChartTheme::from_switch(dark),
        }
    }

    /// Serialize for the D3 bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
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

    #[test]
    fn one_bar_per_filtered_row_in_order() {
        let filtered = vec![book("A1", "A", 100), book("A2", "A", 250)];
        let spec = ChartSpec::build(&filtered, &["A".to_string()], 300, false);
        assert_eq!(spec.bars.len(), 2);
        assert_eq!(spec.bars[0], Bar { title: "A1".to_string(), pages: 100 });
        assert_eq!(spec.bars[1], Bar { title: "A2".to_string(), pages: 250 });
    }

    #[test]
    fn empty_input_yields_well_formed_spec() {
        let spec = ChartSpec::build(&[], &[], 0, true);
        assert!(spec.bars.is_empty());
        assert_eq!(spec.x_label, X_AXIS_LABEL);
        assert_eq!(spec.y_label, Y_AXIS_LABEL);
        assert!(spec.title.contains("authors: none"));
    }

    #[test]
    fn theme_follows_switch_only() {
        let filtered = vec![book("A1", "A", 100)];
        let light = ChartSpec::build(&filtered, &["A".to_string()], 300, false);
        let dark = ChartSpec::build(&filtered, &["A".to_string()], 300, true);
        assert_eq!(light.theme, ChartTheme::Light);
        assert_eq!(dark.theme, ChartTheme::Dark);
        // Same inputs otherwise: the bars are identical.
        assert_eq!(light.bars, dark.bars);
        assert_eq!(light.title, dark.title);
    }

    #[test]
    fn title_embeds_threshold_and_selection() {
        let spec = ChartSpec::build(
            &[],
            &["Frank Herbert".to_string(), "Dan Simmons".to_string()],
            420,
            false,
        );
        assert!(spec.title.contains("420"));
        assert!(spec.title.contains("Frank Herbert, Dan Simmons"));
    }

    #[test]
    fn serializes_to_d3_shape() {
        let filtered = vec![book("Dune", "Frank Herbert", 412)];
        let spec = ChartSpec::build(&filtered, &["Frank Herbert".to_string()], 500, true);
        let value: serde_json::Value = serde_json::from_str(&spec.to_json()).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["bars"][0]["title"], "Dune");
        assert_eq!(value["bars"][0]["pages"], 412);
        assert_eq!(value["y_label"], "Number of pages");
    }
}
