//! Reusable Dioxus RSX components for the book pages dashboard.

mod author_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod page_slider;
mod theme_switch;

pub use author_selector::AuthorSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_slider::PageSlider;
pub use theme_switch::ThemeSwitch;
