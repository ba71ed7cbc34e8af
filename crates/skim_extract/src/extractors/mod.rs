pub mod dynamic;
pub mod static_page;

pub use dynamic::DynamicExtractor;
pub use static_page::StaticExtractor;

/// Title used when a page has no usable title element.
pub const NO_TITLE: &str = "No title found";

/// Collapses every run of whitespace (newlines, tabs, repeated spaces) to a
/// single space and trims the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
