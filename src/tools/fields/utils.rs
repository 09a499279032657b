use scraper::{ElementRef, Html, Selector};

/// Visible text of an element with whitespace runs collapsed.
pub(super) fn visible_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matched by the first selector that matches
/// anything. Later selectors are only tried when earlier ones match nothing;
/// a match with empty text is `None`.
pub(super) fn first_text(doc: &Html, selectors: &[&Selector]) -> Option<String> {
    selectors
        .iter()
        .find_map(|sel| doc.select(sel).next())
        .map(|el| visible_text(&el))
        .filter(|text| !text.is_empty())
}
