//! Ordered lists of icon mappings and their bulk operations.

use iconcat::{catalog, Icon, IconSet};

use crate::mapping::{IconMapping, MatchQuality};

/// An ordered sequence of [`IconMapping`].
///
/// Insertion order matters for output readability and, where documented, for
/// precedence: base-list searches take the first match in caller-supplied
/// order. The list exclusively owns its mappings; merges and clones always
/// copy, never alias.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MappingList {
    entries: Vec<IconMapping>,
}

impl MappingList {
    pub fn new() -> MappingList {
        MappingList::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconMapping> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut IconMapping> {
        self.entries.iter_mut()
    }

    pub fn push(&mut self, mapping: IconMapping) {
        self.entries.push(mapping);
    }

    pub fn as_slice(&self) -> &[IconMapping] {
        &self.entries
    }

    /// Create a mapping for every icon of `destination_set`, pre-filling
    /// sources from `base_lists`.
    ///
    /// If `source_set` is not `Undefined` every new mapping starts with that
    /// source set, and only base entries with the same source set can match.
    /// For each destination the base lists are searched in caller order,
    /// each list front to back, and the first entry whose destination is a
    /// code point match wins; the search stops there. Caller-supplied list
    /// order is the only precedence rule, the lists are never re-sorted.
    pub fn init_from_catalog(
        destination_set: IconSet,
        source_set: IconSet,
        base_lists: &[&MappingList],
    ) -> MappingList {
        let mut entries = Vec::new();
        for destination in catalog::all_icons(destination_set) {
            let mut mapping =
                IconMapping::new(Icon::new(source_set, "", 0), destination);
            'search: for base in base_lists {
                for entry in base.iter() {
                    if !entry.destination.is_code_point_match(&mapping.destination) {
                        continue;
                    }
                    if mapping.source.icon_set != IconSet::Undefined
                        && mapping.source.icon_set != entry.source.icon_set
                    {
                        continue;
                    }
                    // destination and its name stay untouched
                    mapping.source = entry.source.clone();
                    mapping.glyph_match_quality = entry.glyph_match_quality;
                    mapping.metaphor_match_quality = entry.metaphor_match_quality;
                    mapping.is_placeholder = entry.is_placeholder;
                    mapping.comments = entry.comments.clone();
                    break 'search;
                }
            }
            entries.push(mapping);
        }
        MappingList { entries }
    }

    /// A mapping of every icon of a set onto itself, rated `Exact`.
    pub fn init_identity(icon_set: IconSet) -> MappingList {
        let entries = catalog::all_icons(icon_set)
            .map(|icon| IconMapping {
                source: icon.clone(),
                destination: icon,
                glyph_match_quality: MatchQuality::Exact,
                metaphor_match_quality: MatchQuality::Exact,
                is_placeholder: false,
                comments: String::new(),
            })
            .collect();
        MappingList { entries }
    }

    /// Merge this list into `dest`.
    ///
    /// Every `dest` entry whose destination is a code point match is updated
    /// (source, both qualities and the placeholder flag; comments are left
    /// alone). Entries without a single match in `dest` are appended as
    /// copies. O(n*m), fine at catalog sizes.
    pub fn merge_into(&self, dest: &mut MappingList) {
        for entry in &self.entries {
            let mut matched = false;
            for existing in &mut dest.entries {
                if !existing.destination.is_code_point_match(&entry.destination) {
                    continue;
                }
                existing.source = entry.source.clone();
                existing.glyph_match_quality = entry.glyph_match_quality;
                existing.metaphor_match_quality = entry.metaphor_match_quality;
                existing.is_placeholder = entry.is_placeholder;
                matched = true;
            }
            if !matched {
                dest.entries.push(entry.clone());
            }
        }
    }

    pub fn find_by_destination_name(&self, name: &str, ignore_case: bool) -> Vec<&IconMapping> {
        self.find_by_name(name, ignore_case, |mapping| &mapping.destination)
    }

    pub fn find_by_source_name(&self, name: &str, ignore_case: bool) -> Vec<&IconMapping> {
        self.find_by_name(name, ignore_case, |mapping| &mapping.source)
    }

    fn find_by_name(
        &self,
        name: &str,
        ignore_case: bool,
        side: impl Fn(&IconMapping) -> &Icon,
    ) -> Vec<&IconMapping> {
        self.entries
            .iter()
            .filter(|mapping| {
                let candidate = &side(mapping).name;
                if ignore_case {
                    candidate.eq_ignore_ascii_case(name)
                } else {
                    candidate == name
                }
            })
            .collect()
    }

    pub fn find_by_destination_code_point(
        &self,
        icon_set: IconSet,
        code_point: u32,
    ) -> Vec<&IconMapping> {
        let probe = Icon::new(icon_set, "", code_point);
        self.entries
            .iter()
            .filter(|mapping| mapping.destination.is_code_point_match(&probe))
            .collect()
    }

    pub fn find_by_source_code_point(
        &self,
        icon_set: IconSet,
        code_point: u32,
    ) -> Vec<&IconMapping> {
        let probe = Icon::new(icon_set, "", code_point);
        self.entries
            .iter()
            .filter(|mapping| mapping.source.is_code_point_match(&probe))
            .collect()
    }

    /// Stable sort by destination name, ordinal comparison.
    pub fn sort_by_destination_name(&mut self) {
        self.entries
            .sort_by(|a, b| a.destination.name.as_str().cmp(b.destination.name.as_str()));
    }

    /// Stable sort by source name, ordinal comparison.
    pub fn sort_by_source_name(&mut self) {
        self.entries
            .sort_by(|a, b| a.source.name.as_str().cmp(b.source.name.as_str()));
    }

    /// Stable sort keyed by destination icon set, then code point.
    pub fn sort_by_destination_code_point(&mut self) {
        self.entries
            .sort_by_key(|mapping| (mapping.destination.icon_set, mapping.destination.code_point));
    }

    /// Stable sort keyed by source icon set, then code point.
    pub fn sort_by_source_code_point(&mut self) {
        self.entries
            .sort_by_key(|mapping| (mapping.source.icon_set, mapping.source.code_point));
    }

    /// Refresh every source and destination name from its catalog.
    ///
    /// Icons in the `Undefined` set keep their custom names, as does any
    /// icon whose code point the catalog does not know.
    pub fn reprocess(&mut self) {
        for mapping in &mut self.entries {
            for icon in [&mut mapping.source, &mut mapping.destination] {
                if icon.icon_set == IconSet::Undefined {
                    continue;
                }
                if let Some(name) = catalog::lookup_name(icon.icon_set, icon.code_point) {
                    icon.name = name.into();
                }
            }
        }
    }
}

impl IntoIterator for MappingList {
    type Item = IconMapping;
    type IntoIter = std::vec::IntoIter<IconMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<IconMapping> for MappingList {
    fn from_iter<T: IntoIterator<Item = IconMapping>>(iter: T) -> Self {
        MappingList {
            entries: iter.into_iter().collect(),
        }
    }
}
