//! Mapping records: a source icon paired with a destination icon plus
//! quality-of-match metadata.

use std::{fmt::Display, str::FromStr};

use iconcat::{Icon, IconSet};
use smol_str::SmolStr;

/// Subjective similarity between a source and destination glyph or metaphor.
///
/// Ordered from worst to best. Metadata only: it is copied and merged but
/// never drives reconciliation decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    #[default]
    NoMatch,
    Low,
    Medium,
    High,
    Exact,
}

impl MatchQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchQuality::NoMatch => "NoMatch",
            MatchQuality::Low => "Low",
            MatchQuality::Medium => "Medium",
            MatchQuality::High => "High",
            MatchQuality::Exact => "Exact",
        }
    }
}

impl FromStr for MatchQuality {
    type Err = SmolStr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoMatch" => Ok(Self::NoMatch),
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Exact" => Ok(Self::Exact),
            _ => Err(s.into()),
        }
    }
}

impl Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single source to destination icon mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconMapping {
    pub source: Icon,
    pub destination: Icon,
    pub glyph_match_quality: MatchQuality,
    pub metaphor_match_quality: MatchQuality,
    pub is_placeholder: bool,
    pub comments: String,
}

impl IconMapping {
    pub fn new(source: Icon, destination: Icon) -> IconMapping {
        IconMapping {
            source,
            destination,
            ..Default::default()
        }
    }

    /// Destination must have a code point and source must satisfy the icon
    /// source validity rule.
    pub fn is_valid(&self) -> bool {
        self.destination.is_valid_destination() && self.source.is_valid_source()
    }

    /// Whether a font builder can emit a glyph for this mapping.
    ///
    /// The source must come from a real catalog with an assigned code point;
    /// the destination set is irrelevant, only its code point matters.
    pub fn is_valid_for_font_build(&self) -> bool {
        self.source.icon_set != IconSet::Undefined
            && self.source.code_point != 0
            && self.destination.code_point != 0
    }
}
