//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Settlement infobox on a state article.
macro_rules! infobox_row {
    ($row:literal, $rest:literal) => {
        concat!(
            "#mw-content-text > div.mw-content-ltr.mw-parser-output > ",
            "table.infobox.ib-settlement.vcard > tbody > tr:nth-child(",
            $row,
            ") > td > ",
            $rest
        )
    };
}

/// Capital link in row 12 of the infobox.
pub static CAPITAL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(infobox_row!("12", "a")).expect("valid capital selector"));

/// Governor link in row 17, wrapped in a `<span>` on most pages.
pub static GOVERNOR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(infobox_row!("17", "span > a:nth-child(1)")).expect("valid governor selector")
});

/// Governor link in row 17 without the wrapping `<span>`.
pub static GOVERNOR_FALLBACK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(infobox_row!("17", "a:nth-child(1)"))
        .expect("valid governor fallback selector")
});

/// Uploader of the current revision in a Commons file-history table.
pub static CREDIT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "#mw-imagepage-section-filehistory > table > tbody > tr:nth-child(2) > td:nth-child(5) > a > bdi",
    )
    .expect("valid credit selector")
});
