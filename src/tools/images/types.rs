use serde::{Deserialize, Serialize};

/// One known infobox layout: if `needle` occurs in the page, the image URL is
/// the next `src="..."` attribute after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub layout: &'static str,
    pub needle: &'static str,
}

/// The two infobox images a state page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKind {
    Flag,
    Seal,
}

impl ImageKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Seal => "seal",
        }
    }

    /// Markers tried in priority order.
    pub fn markers(&self) -> &'static [Marker] {
        match self {
            Self::Flag => super::FLAG_MARKERS,
            Self::Seal => super::SEAL_MARKERS,
        }
    }

    /// Commons file name for this image, e.g. `Flag_of_Ohio.svg`.
    pub fn commons_file(&self, stem: &str) -> String {
        match self {
            Self::Flag => format!("Flag_of_{stem}.svg"),
            Self::Seal => format!("Seal_of_{stem}.svg"),
        }
    }
}
