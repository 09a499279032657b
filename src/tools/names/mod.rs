//! Name Tools
//!
//! Wikipedia titles for most states are the display name with spaces turned
//! into underscores. Three states collide with other articles and need a
//! disambiguated title, and Commons files for Georgia use yet another stem.
//! These tables only cover naming irregularities known today; if the source
//! sites rename a page, the affected state silently stops resolving.


/// Underscored display name → Wikipedia article identifier.
const URL_EXCEPTIONS: [(&str, &str); 3] = [
    ("Georgia", "Georgia_(U.S._state)"),
    ("New_York", "New_York_(state)"),
    ("Washington", "Washington_(state)"),
];

/// Wikipedia identifier → stem used in Commons file names.
const COMMONS_EXCEPTIONS: [(&str, &str); 1] = [("Georgia_(U.S._state)", "the_State_of_Georgia")];

/// Convert a display name to its article identifier.
///
/// Spaces are replaced first; the exception table is keyed on the
/// underscored form.
pub fn to_url_form(name: &str) -> String {
    let underscored = name.replace(' ', "_");
    URL_EXCEPTIONS
        .iter()
        .find(|(plain, _)| *plain == underscored)
        .map(|(_, special)| special.to_string())
        .unwrap_or(underscored)
}

/// Convert an article identifier back to its display name.
///
/// Inverse of [`to_url_form`]: special identifiers are matched before any
/// underscore is touched.
pub fn to_display_form(identifier: &str) -> String {
    let plain = URL_EXCEPTIONS
        .iter()
        .find(|(_, special)| *special == identifier)
        .map(|(plain, _)| *plain)
        .unwrap_or(identifier);
    plain.replace('_', " ")
}

/// Stem used for `File:Flag_of_<stem>.svg` and `File:Seal_of_<stem>.svg`.
pub fn commons_form(identifier: &str) -> String {
    COMMONS_EXCEPTIONS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, stem)| stem.to_string())
        .unwrap_or_else(|| identifier.to_string())
}
