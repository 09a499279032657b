//! Image Tools
//!
//! Flag and seal URLs are located by literal marker search over the raw page
//! HTML. Each layout the infobox has been seen in is one row of a marker
//! table; supporting a new layout means adding a row.

mod utils;

pub mod types;

pub use types::*;
use utils::*;

use crate::error::{Result, StateFactsError};

/// Infobox cell wrapping a `File:` link, with the given `<span>` attributes.
macro_rules! infobox_file {
    ($span_attrs:literal, $file:literal) => {
        concat!(
            r#"<div class="ib-settlement-cols-cell"><span "#,
            $span_attrs,
            r#"><a href="/wiki/File:"#,
            $file
        )
    };
}

pub const FLAG_MARKERS: &[Marker] = &[
    Marker {
        layout: "bordered flag",
        needle: infobox_file!(r#"class="mw-image-border" typeof="mw:File""#, "Flag_of_"),
    },
    Marker {
        layout: "plain flag",
        needle: infobox_file!(r#"typeof="mw:File""#, "Flag_of_"),
    },
];

pub const SEAL_MARKERS: &[Marker] = &[
    Marker {
        layout: "Seal_of_",
        needle: infobox_file!(r#"typeof="mw:File""#, "Seal_of_"),
    },
    Marker {
        layout: "State_Seal_of_",
        needle: infobox_file!(r#"typeof="mw:File""#, "State_Seal_of_"),
    },
    Marker {
        layout: "State_seal_of_",
        needle: infobox_file!(r#"typeof="mw:File""#, "State_seal_of_"),
    },
    Marker {
        layout: "Great_Seal_of_",
        needle: infobox_file!(r#"typeof="mw:File""#, "Great_Seal_of_"),
    },
    // Arizona and Wyoming name their seal files outside every generic pattern.
    Marker {
        layout: "Arizona seal file",
        needle: infobox_file!(r#"typeof="mw:File""#, r#"Arizona_state_seal.svg""#),
    },
    Marker {
        layout: "Wyoming seal file",
        needle: infobox_file!(r#"typeof="mw:File""#, "Wyoming-StateSeal.svg"),
    },
];

/// Extract the image URL using the first marker present in `html`.
///
/// Once a marker matches, no later marker is tried: if the matched layout has
/// no `src="..."` after it the result is `NotFound`.
pub fn extract_image_url(html: &str, kind: ImageKind) -> Result<String> {
    let markers = kind.markers();
    let marker = first_present(html, markers).ok_or_else(|| {
        StateFactsError::not_found(&format!(
            "{} image (none of {} layouts matched)",
            kind.name(),
            markers.len()
        ))
    })?;

    src_after(html, marker.needle).ok_or_else(|| {
        StateFactsError::not_found(&format!(
            "{} image src after {} marker",
            kind.name(),
            marker.layout
        ))
    })
}

/// Extract the flag image URL from a state page.
pub fn extract_flag_url(html: &str) -> Result<String> {
    extract_image_url(html, ImageKind::Flag)
}

/// Extract the seal image URL from a state page.
pub fn extract_seal_url(html: &str) -> Result<String> {
    extract_image_url(html, ImageKind::Seal)
}
