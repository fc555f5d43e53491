//! The four poem regions of Thailand.

/// A fixed geographic/cultural category used to pick poem style and material.
///
/// Selected once per user flow and carried through all subsequent steps
/// by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    Northeast,
    Central,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::North,
        Region::South,
        Region::Northeast,
        Region::Central,
    ];

    /// Parse a region code string. Returns `None` for unrecognized codes;
    /// callers decide the fallback (generic name in the prompt builder,
    /// `Central` in the mock source).
    pub fn from_code(code: &str) -> Option<Region> {
        match code {
            "north" => Some(Region::North),
            "south" => Some(Region::South),
            "northeast" => Some(Region::Northeast),
            "central" => Some(Region::Central),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::Northeast => "northeast",
            Region::Central => "central",
        }
    }

    /// English display name for UI output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::North => "Northern Thailand",
            Region::South => "Southern Thailand",
            Region::Northeast => "Isan",
            Region::Central => "Central Thailand",
        }
    }

    pub fn thai_name(&self) -> &'static str {
        match self {
            Region::North => "ภาคเหนือ",
            Region::South => "ภาคใต้",
            Region::Northeast => "อีสาน",
            Region::Central => "ภาคกลาง",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Region::North => "🏔️",
            Region::South => "🏝️",
            Region::Northeast => "🌾",
            Region::Central => "🏛️",
        }
    }

    /// Lowercase name used when composing model prompts.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Region::North => "northern thailand",
            Region::South => "southern thailand",
            Region::Northeast => "isan",
            Region::Central => "central thailand",
        }
    }
}
