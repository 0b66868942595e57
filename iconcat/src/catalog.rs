//! Icon sets and their bundled catalogs.
//!
//! A catalog maps a set-local code point to a canonical name. Lookup maps are
//! built once on first access ([`OnceLock`]) from the static tables in
//! [`crate::data`]; enumeration order is the authoring order of those tables
//! and is observable behavior (the nearest-size fallback tie-break depends
//! on it).

use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    str::FromStr,
    sync::OnceLock,
};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{data, error::Error};

/// An enumerated identifier for a named collection of icons.
///
/// `Undefined` is a valid sentinel: destination icons belonging to no
/// standard catalog (synthetic or custom sets) use it, as do source icons
/// identified purely by a free-text name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IconSet {
    #[default]
    Undefined,
    FluentUISystemFilled,
    FluentUISystemRegular,
    LineAwesomeBrands,
    LineAwesomeRegular,
    LineAwesomeSolid,
    SegoeFluent,
    SegoeMDL2Assets,
    SegoeUISymbol,
}

impl IconSet {
    pub fn all() -> &'static [IconSet; 9] {
        &[
            IconSet::Undefined,
            IconSet::FluentUISystemFilled,
            IconSet::FluentUISystemRegular,
            IconSet::LineAwesomeBrands,
            IconSet::LineAwesomeRegular,
            IconSet::LineAwesomeSolid,
            IconSet::SegoeFluent,
            IconSet::SegoeMDL2Assets,
            IconSet::SegoeUISymbol,
        ]
    }

    /// The symbolic name used when serializing an icon set.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSet::Undefined => "Undefined",
            IconSet::FluentUISystemFilled => "FluentUISystemFilled",
            IconSet::FluentUISystemRegular => "FluentUISystemRegular",
            IconSet::LineAwesomeBrands => "LineAwesomeBrands",
            IconSet::LineAwesomeRegular => "LineAwesomeRegular",
            IconSet::LineAwesomeSolid => "LineAwesomeSolid",
            IconSet::SegoeFluent => "SegoeFluent",
            IconSet::SegoeMDL2Assets => "SegoeMDL2Assets",
            IconSet::SegoeUISymbol => "SegoeUISymbol",
        }
    }
}

impl FromStr for IconSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconSet::all()
            .iter()
            .find(|set| set.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownIconSet(s.into()))
    }
}

impl Display for IconSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a single icon within (or outside) an icon set.
///
/// A code point of 0 means "no code point assigned"; this is valid
/// transiently, e.g. before synthetic assignment during reconciliation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Icon {
    pub icon_set: IconSet,
    pub name: SmolStr,
    pub code_point: u32,
}

impl Icon {
    pub fn new(icon_set: IconSet, name: impl AsRef<str>, code_point: u32) -> Icon {
        Icon {
            icon_set,
            name: SmolStr::new(name),
            code_point,
        }
    }

    /// Whether this icon can stand as the source of a mapping.
    ///
    /// Undefined sources are identified by name alone; catalog sources need
    /// a code point.
    pub fn is_valid_source(&self) -> bool {
        match self.icon_set {
            IconSet::Undefined => !self.name.is_empty(),
            _ => self.code_point != 0,
        }
    }

    /// Whether this icon can stand as the destination of a mapping.
    pub fn is_valid_destination(&self) -> bool {
        self.code_point != 0
    }

    /// Whether two icons refer to the same code point of the same set.
    ///
    /// Both code points must be assigned; names are irrelevant.
    pub fn is_code_point_match(&self, other: &Icon) -> bool {
        self.code_point != 0
            && other.code_point != 0
            && self.icon_set == other.icon_set
            && self.code_point == other.code_point
    }
}

fn code_point_maps() -> &'static HashMap<IconSet, IndexMap<u32, &'static str>> {
    static MAPS: OnceLock<HashMap<IconSet, IndexMap<u32, &'static str>>> = OnceLock::new();
    MAPS.get_or_init(|| {
        IconSet::all()
            .iter()
            .map(|set| {
                (
                    *set,
                    data::entries(*set).iter().map(|(cp, name)| (*cp, *name)).collect(),
                )
            })
            .collect()
    })
}

/// Look up the canonical name for a code point, if the set catalogs it.
pub fn lookup_name(icon_set: IconSet, code_point: u32) -> Option<&'static str> {
    code_point_maps()
        .get(&icon_set)
        .and_then(|by_code_point| by_code_point.get(&code_point))
        .copied()
}

/// Every icon of a set, in catalog enumeration order.
///
/// Empty for `Undefined` and any set without bundled data.
pub fn all_icons(icon_set: IconSet) -> impl Iterator<Item = Icon> {
    data::entries(icon_set)
        .iter()
        .map(move |(code_point, name)| Icon::new(icon_set, *name, *code_point))
}
