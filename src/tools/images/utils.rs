use super::types::Marker;

const SRC_ATTR: &str = r#"src=""#;

/// First marker (in table order) that occurs anywhere in `html`.
pub(super) fn first_present<'m>(html: &str, markers: &'m [Marker]) -> Option<&'m Marker> {
    markers.iter().find(|m| html.contains(m.needle))
}

/// Value of the first `src="..."` attribute after the first occurrence of `needle`.
pub(super) fn src_after(html: &str, needle: &str) -> Option<String> {
    let after_marker = &html[html.find(needle)? + needle.len()..];
    let after_src = &after_marker[after_marker.find(SRC_ATTR)? + SRC_ATTR.len()..];
    let end = after_src.find('"')?;
    Some(after_src[..end].to_string())
}
