//! Field Tools

mod utils;

use utils::*;

use scraper::Html;

use crate::error::{Result, StateFactsError};
use crate::selectors::{
    CAPITAL_SELECTOR, CREDIT_SELECTOR, GOVERNOR_FALLBACK_SELECTOR, GOVERNOR_SELECTOR,
};
use crate::types::CREDIT_UNAVAILABLE;

/// Capital city from a state article's infobox.
pub fn extract_capital(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    first_text(&doc, &[&*CAPITAL_SELECTOR]).ok_or_else(|| StateFactsError::not_found("capital"))
}

/// Sitting governor from a state article's infobox.
///
/// Some pages wrap the governor link in a `<span>`, others do not. The bare
/// layout is only tried when the wrapped one matches nothing.
pub fn extract_governor(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    first_text(&doc, &[&*GOVERNOR_SELECTOR, &*GOVERNOR_FALLBACK_SELECTOR])
        .ok_or_else(|| StateFactsError::not_found("governor"))
}

/// Uploader credited on a Commons file page, or `"N.A."` if the file-history
/// table does not have one.
pub fn extract_credit(html: &str) -> String {
    let doc = Html::parse_document(html);
    first_text(&doc, &[&*CREDIT_SELECTOR]).unwrap_or_else(|| CREDIT_UNAVAILABLE.to_string())
}
