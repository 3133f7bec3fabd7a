//! Helper functions for working with box score markup.

use crate::error::ParseError;
use scraper::{ElementRef, Selector};

/// Creates a CSS selector from a string.
///
/// This is a wrapper around scraper's Selector::parse that converts
/// parsing errors into typed errors for consistent handling.
pub fn selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Returns the element's text content with surrounding whitespace trimmed.
///
/// Cell text is taken verbatim apart from the trim; no type coercion
/// happens at this layer.
pub fn cell_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Returns the cell's stat identifier attribute, if present.
pub fn data_stat(element: ElementRef) -> Option<&str> {
    element.value().attr("data-stat")
}
