//! Rebuilding the composite symbol mapping list.
//!
//! The composite list is a drop-in replacement mapping for the Segoe Fluent
//! catalog that must also cover every [`Symbol`] member. Rebuilding is a
//! single pass through fixed stages: translate stale intermediate sources,
//! merge the symbol enumeration, sort, assign synthetic code points to gaps,
//! normalize source sizes, validate. Any invariant violation aborts the whole
//! rebuild with a [`ReconcileError`]; no partial list is ever returned, and
//! nothing is resumable. Rerun from scratch after fixing the inputs.

use std::collections::HashSet;

use iconcat::{
    fallback,
    names::{IconName, IconSize},
    Icon, IconSet,
};
use log::debug;

use crate::{
    error::ReconcileError, list::MappingList, mapping::IconMapping, probe::GlyphSourceProbe,
    symbol::Symbol,
};

/// First code point of the reserved range for destinations without one.
pub const SYNTHETIC_CODE_POINT_BASE: u32 = 0xF8000;

/// Comment prefix marking entries synthesized from the symbol enumeration.
pub const PROVENANCE_TAG: &str = "[Symbol]";

/// The catalog the composite list substitutes for.
const REPLACED_SET: IconSet = IconSet::SegoeFluent;

/// Sources still pointing here are stale and must be translated away.
const INTERMEDIATE_SET: IconSet = IconSet::SegoeMDL2Assets;

/// The canonical size all Fluent UI System sources are normalized to.
const NORMALIZED_SIZE: IconSize = IconSize::Size20;

/// Rebuild the composite symbol mapping list.
///
/// `composite` must contain the Segoe Fluent base entries (destination in
/// [`IconSet::SegoeFluent`]); entries whose destination name matches a
/// symbol are updated in place, so previously synthesized entries survive a
/// rebuild with their curated quality ratings and comments intact.
///
/// `redirects` translates intermediate (Segoe MDL2) source code points to
/// real sources: its destinations are MDL2 icons, its sources replacements.
/// `translations` maps very old Segoe UI Symbol code points to the modern
/// range: sources are [`IconSet::SegoeUISymbol`] icons, destinations Segoe
/// Fluent icons.
///
/// An optional `probe` additionally vets every catalog source during final
/// validation.
pub fn rebuild_symbol_mappings(
    composite: &MappingList,
    redirects: &MappingList,
    translations: &MappingList,
    probe: Option<&dyn GlyphSourceProbe>,
) -> Result<MappingList, ReconcileError> {
    let mut entries: Vec<IconMapping> = composite.iter().cloned().collect();

    translate_intermediate_sources(&mut entries, redirects)?;
    merge_symbol_enumeration(&mut entries, translations)?;

    let mut out: MappingList = entries.into_iter().collect();
    // sort before assigning synthetic points so the assignment order is
    // deterministic and reviewable
    out.sort_by_destination_name();
    fill_code_point_gaps(&mut out);
    normalize_source_sizes(&mut out);
    validate(&out, probe)?;
    Ok(out)
}

/// Step 1: replace every intermediate-set source via the redirect table.
///
/// The source code point is looked up as a destination code point; exactly
/// one redirect entry must match.
fn translate_intermediate_sources(
    entries: &mut [IconMapping],
    redirects: &MappingList,
) -> Result<(), ReconcileError> {
    for mapping in entries.iter_mut() {
        if mapping.source.icon_set != INTERMEDIATE_SET {
            continue;
        }
        let matches: Vec<&IconMapping> = redirects
            .iter()
            .filter(|entry| entry.destination.is_code_point_match(&mapping.source))
            .collect();
        if matches.len() != 1 {
            return Err(ReconcileError::AmbiguousTranslation {
                stage: "intermediate source translation",
                icon: mapping.source.clone(),
                matches: matches.len(),
            });
        }
        debug!(
            "redirecting source {:?} to {:?}",
            mapping.source, matches[0].source
        );
        mapping.source = matches[0].source.clone();
    }
    Ok(())
}

/// Step 2: fold every symbol enumeration member into the composite.
fn merge_symbol_enumeration(
    entries: &mut Vec<IconMapping>,
    translations: &MappingList,
) -> Result<(), ReconcileError> {
    for symbol in Symbol::all() {
        let raw = symbol.value();

        // 2a: legacy values go through the translation table
        let effective = if symbol.is_legacy_value() {
            let legacy = Icon::new(IconSet::SegoeUISymbol, symbol.as_str(), raw);
            let hits: Vec<&IconMapping> = translations
                .iter()
                .filter(|entry| entry.source.is_code_point_match(&legacy))
                .collect();
            match (hits.len(), *symbol) {
                (1, _) => hits[0].destination.code_point,
                // the one member documented as permanently unmapped
                (_, Symbol::Placeholder) => continue,
                (matches, _) => {
                    return Err(ReconcileError::AmbiguousTranslation {
                        stage: "legacy symbol translation",
                        icon: legacy,
                        matches,
                    })
                }
            }
        } else {
            raw
        };

        // 2b: at most one replaced-set entry may carry the effective point
        let probe_icon = Icon::new(REPLACED_SET, "", effective);
        let matched: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.destination.is_code_point_match(&probe_icon))
            .map(|(index, _)| index)
            .collect();
        if matched.len() > 1 {
            return Err(ReconcileError::DuplicateDestination {
                what: "code point",
                mapping: entries[matched[1]].clone(),
            });
        }
        let Some(&template_index) = matched.first() else {
            if *symbol == Symbol::Placeholder {
                continue;
            }
            return Err(ReconcileError::MissingEnumerationCoverage {
                symbol: *symbol,
                value: raw,
            });
        };

        let template = entries[template_index].clone();
        let comments = if template.comments.starts_with(PROVENANCE_TAG) {
            template.comments.clone()
        } else if template.comments.is_empty() {
            PROVENANCE_TAG.to_string()
        } else {
            format!("{PROVENANCE_TAG} {}", template.comments)
        };
        let replacement = IconMapping {
            source: template.source.clone(),
            // the destination keeps the untranslated enumeration value
            destination: Icon::new(IconSet::Undefined, symbol.as_str(), raw),
            glyph_match_quality: template.glyph_match_quality,
            metaphor_match_quality: template.metaphor_match_quality,
            is_placeholder: template.is_placeholder,
            comments,
        };

        // 2c: a name match is updated in place, anything else is appended.
        // Only destination and source are overwritten; curated ratings and
        // comments on an existing entry survive.
        match entries
            .iter()
            .position(|entry| entry.destination.name.eq_ignore_ascii_case(symbol.as_str()))
        {
            Some(index) => {
                debug!("updating composite entry for symbol {symbol}");
                entries[index].destination = replacement.destination;
                entries[index].source = replacement.source;
            }
            None => {
                debug!("appending composite entry for symbol {symbol}");
                entries.push(replacement);
            }
        }
    }
    Ok(())
}

/// Step 4: assign monotonically increasing synthetic code points, in sorted
/// order, to every destination still lacking one.
fn fill_code_point_gaps(out: &mut MappingList) {
    let mut next = SYNTHETIC_CODE_POINT_BASE;
    for mapping in out.iter_mut() {
        if mapping.destination.code_point == 0 {
            debug!(
                "assigning synthetic code point {next:X} to '{}'",
                mapping.destination.name
            );
            mapping.destination.code_point = next;
            next += 1;
        }
    }
}

/// Step 5: re-resolve Fluent UI System sources to the canonical size, then
/// refresh all names from the catalogs.
fn normalize_source_sizes(out: &mut MappingList) {
    for mapping in out.iter_mut() {
        let set = mapping.source.icon_set;
        if !matches!(
            set,
            IconSet::FluentUISystemRegular | IconSet::FluentUISystemFilled
        ) {
            continue;
        }
        let parsed = IconName::parse(&mapping.source.name);
        if parsed.size == NORMALIZED_SIZE {
            continue;
        }
        if let Some(icon) = fallback::find_best(set, &parsed.base, parsed.theme, NORMALIZED_SIZE) {
            mapping.source = icon;
        }
    }
    out.reprocess();
}

/// Step 6: all-or-nothing validation of the finished list.
fn validate(
    out: &MappingList,
    probe: Option<&dyn GlyphSourceProbe>,
) -> Result<(), ReconcileError> {
    // full enumeration coverage, matched by both name and code point
    for symbol in Symbol::all() {
        if *symbol == Symbol::Placeholder {
            continue;
        }
        let covered = out.iter().any(|entry| {
            entry.destination.code_point == symbol.value()
                && entry.destination.name.eq_ignore_ascii_case(symbol.as_str())
        });
        if !covered {
            return Err(ReconcileError::MissingEnumerationCoverage {
                symbol: *symbol,
                value: symbol.value(),
            });
        }
    }

    // unique destination names (case-insensitive) and code points
    let mut names = HashSet::new();
    let mut code_points = HashSet::new();
    for entry in out.iter() {
        if !names.insert(entry.destination.name.to_ascii_lowercase()) {
            return Err(ReconcileError::DuplicateDestination {
                what: "name",
                mapping: entry.clone(),
            });
        }
        if !code_points.insert(entry.destination.code_point) {
            return Err(ReconcileError::DuplicateDestination {
                what: "code point",
                mapping: entry.clone(),
            });
        }
    }

    // every entry must be buildable, unless its source is intentionally
    // outside any catalog
    for entry in out.iter() {
        if entry.source.icon_set == IconSet::Undefined {
            continue;
        }
        if !entry.is_valid_for_font_build() {
            return Err(ReconcileError::InvalidFontSource(entry.clone()));
        }
        if let Some(probe) = probe {
            if !probe.can_build_font(entry.source.icon_set, entry.source.code_point) {
                return Err(ReconcileError::InvalidFontSource(entry.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use iconcat::{all_icons, names::IconTheme};

    use crate::{mapping::MatchQuality, probe::CatalogGlyphProbe};

    use super::*;

    /// Fluent base metaphor for every entry of the Segoe catalog.
    static SEGOE_TO_FLUENT: &[(&str, &str)] = &[
        ("GlobalNavigationButton", "navigation"),
        ("Brightness", "brightness_high"),
        ("ChevronDown", "chevron_down"),
        ("ChevronUp", "chevron_up"),
        ("Edit", "edit"),
        ("Add", "add"),
        ("Cancel", "dismiss"),
        ("More", "more_horizontal"),
        ("Settings", "settings"),
        ("Video", "video"),
        ("Mail", "mail"),
        ("People", "people"),
        ("Phone", "call"),
        ("Pin", "pin"),
        ("Shop", "cart"),
        ("Stop", "stop"),
        ("Link", "link"),
        ("Filter", "filter"),
        ("Zoom", "zoom_in"),
        ("ZoomOut", "zoom_out"),
        ("Microphone", "mic"),
        ("Search", "search"),
        ("Camera", "camera"),
        ("Attach", "attach"),
        ("Send", "send"),
        ("Forward", "arrow_right"),
        ("Back", "arrow_left"),
        ("Refresh", "arrow_clockwise"),
        ("Share", "share"),
        ("Lock", "lock_closed"),
        ("FavoriteStar", "star"),
        ("Remove", "subtract"),
        ("CheckMark", "checkmark"),
        ("Print", "print"),
        ("Up", "arrow_up"),
        ("Delete", "delete"),
        ("Save", "save"),
        ("Play", "play"),
        ("Pause", "pause"),
        ("ChevronLeft", "chevron_left"),
        ("ChevronRight", "chevron_right"),
        ("Contact", "person"),
        ("Calendar", "calendar_ltr"),
        ("Redo", "arrow_redo"),
        ("Undo", "arrow_undo"),
        ("Page", "document"),
        ("Home", "home"),
        ("View", "eye"),
        ("Clear", "dismiss_circle"),
        ("Sync", "arrow_sync"),
        ("Download", "arrow_download"),
        ("Help", "question_circle"),
        ("Upload", "arrow_upload"),
        ("Switch", "arrow_swap"),
        ("Copy", "copy"),
        ("OpenFile", "folder_open"),
        ("Accept", "checkmark_circle"),
    ];

    /// Modern Segoe name for every very old symbol name.
    static LEGACY_TO_SEGOE: &[(&str, &str)] = &[
        ("Previous", "ChevronLeft"),
        ("Next", "ChevronRight"),
        ("Play", "Play"),
        ("Pause", "Pause"),
        ("Edit", "Edit"),
        ("Save", "Save"),
        ("Clear", "Clear"),
        ("Delete", "Delete"),
        ("Remove", "Remove"),
        ("Add", "Add"),
        ("Cancel", "Cancel"),
        ("Accept", "Accept"),
        ("More", "More"),
        ("Redo", "Redo"),
        ("Undo", "Undo"),
        ("Home", "Home"),
        ("Up", "Up"),
        ("Forward", "Forward"),
        ("Back", "Back"),
        ("Favorite", "FavoriteStar"),
        ("Camera", "Camera"),
        ("Setting", "Settings"),
        ("Video", "Video"),
        ("Sync", "Sync"),
        ("Download", "Download"),
        ("Mail", "Mail"),
        ("Find", "Search"),
        ("Help", "Help"),
        ("Upload", "Upload"),
    ];

    fn icon_named(set: IconSet, name: &str) -> Icon {
        all_icons(set)
            .find(|icon| icon.name == name)
            .unwrap_or_else(|| panic!("no {set} icon named '{name}'"))
    }

    fn fluent_source(base: &str) -> Icon {
        fallback::find_best(
            IconSet::FluentUISystemRegular,
            base,
            IconTheme::Regular,
            NORMALIZED_SIZE,
        )
        .unwrap_or_else(|| panic!("no fluent icon for base '{base}'"))
    }

    fn base_for(segoe_name: &str) -> &'static str {
        SEGOE_TO_FLUENT
            .iter()
            .find(|(name, _)| *name == segoe_name)
            .map(|(_, base)| *base)
            .unwrap_or_else(|| panic!("no fluent base for '{segoe_name}'"))
    }

    /// The Segoe Fluent drop-in list: every catalog icon mapped from a
    /// Fluent UI System source.
    fn composite() -> MappingList {
        all_icons(IconSet::SegoeFluent)
            .map(|destination| {
                let mut mapping =
                    IconMapping::new(fluent_source(base_for(&destination.name)), destination);
                mapping.glyph_match_quality = MatchQuality::High;
                mapping.metaphor_match_quality = MatchQuality::High;
                mapping
            })
            .collect()
    }

    fn legacy_translations() -> MappingList {
        LEGACY_TO_SEGOE
            .iter()
            .map(|(old, new)| {
                IconMapping::new(
                    icon_named(IconSet::SegoeUISymbol, old),
                    icon_named(IconSet::SegoeFluent, new),
                )
            })
            .collect()
    }

    fn rebuild(composite: &MappingList) -> Result<MappingList, ReconcileError> {
        rebuild_symbol_mappings(
            composite,
            &MappingList::new(),
            &legacy_translations(),
            Some(&CatalogGlyphProbe),
        )
    }

    #[test]
    fn rebuild_covers_every_symbol() {
        let result = rebuild(&composite()).unwrap();
        for symbol in Symbol::all() {
            if *symbol == Symbol::Placeholder {
                continue;
            }
            let hits = result.find_by_destination_name(symbol.as_str(), false);
            assert_eq!(1, hits.len(), "{symbol}");
            assert_eq!(symbol.value(), hits[0].destination.code_point, "{symbol}");
            assert_eq!(IconSet::Undefined, hits[0].destination.icon_set, "{symbol}");
        }
    }

    #[test]
    fn placeholder_is_skipped_not_fatal() {
        let result = rebuild(&composite()).unwrap();
        assert!(result.find_by_destination_name("Placeholder", true).is_empty());
    }

    #[test]
    fn output_is_sorted_by_destination_name() {
        let result = rebuild(&composite()).unwrap();
        let names: Vec<_> = result.iter().map(|m| m.destination.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(sorted, names);
    }

    #[test]
    fn symbols_without_a_segoe_name_are_appended_with_provenance() {
        let result = rebuild(&composite()).unwrap();
        // "Previous" exists in no Segoe catalog; it must be a new entry
        // sourced from the translated ChevronLeft mapping
        let previous = result.find_by_destination_name("Previous", false)[0];
        assert_eq!("ic_fluent_chevron_left_20_regular", previous.source.name);
        assert!(previous.comments.starts_with(PROVENANCE_TAG));
        // name-matched entries are converted in place and keep their comments
        let add = result.find_by_destination_name("Add", false)[0];
        assert_eq!("ic_fluent_add_20_regular", add.source.name);
        assert!(add.comments.is_empty());
        // five symbols have no Segoe-named entry: Previous, Next, Favorite,
        // Setting, Find
        assert_eq!(composite().len() + 5, result.len());
    }

    #[test]
    fn untouched_catalog_entries_survive_as_a_drop_in_remainder() {
        let result = rebuild(&composite()).unwrap();
        let search = result.find_by_destination_name("Search", false)[0];
        assert_eq!(IconSet::SegoeFluent, search.destination.icon_set);
        assert_eq!(0xE721, search.destination.code_point);
        let brightness = result.find_by_destination_name("Brightness", false)[0];
        assert_eq!(IconSet::SegoeFluent, brightness.destination.icon_set);
    }

    #[test]
    fn sources_are_normalized_to_the_canonical_size() {
        let result = rebuild(&composite()).unwrap();
        // print has no size 20; 16 and 24 tie and 16 is enumerated first
        let print = result.find_by_destination_name("Print", false)[0];
        assert_eq!("ic_fluent_print_16_regular", print.source.name);
        for entry in result.iter() {
            if entry.source.icon_set == IconSet::FluentUISystemRegular
                && entry.source.name != "ic_fluent_print_16_regular"
            {
                let parsed = IconName::parse(&entry.source.name);
                assert_eq!(IconSize::Size20, parsed.size, "{}", entry.source.name);
            }
        }
    }

    #[test]
    fn preexisting_symbol_entries_keep_curated_metadata() {
        let mut input = composite();
        let mut curated = IconMapping::new(
            icon_named(IconSet::LineAwesomeSolid, "heart"),
            Icon::new(IconSet::Undefined, "Previous", 0x999),
        );
        curated.glyph_match_quality = MatchQuality::Low;
        curated.comments = "curated".to_string();
        input.push(curated);

        let result = rebuild(&input).unwrap();
        let previous = result.find_by_destination_name("Previous", false)[0];
        // destination and source are overwritten...
        assert_eq!(Symbol::Previous.value(), previous.destination.code_point);
        assert_eq!("ic_fluent_chevron_left_20_regular", previous.source.name);
        // ...curated ratings and comments are not
        assert_eq!(MatchQuality::Low, previous.glyph_match_quality);
        assert_eq!("curated", previous.comments);
    }

    #[test]
    fn gaps_are_filled_in_name_order_from_the_reserved_base() {
        let mut input = composite();
        input.push(IconMapping::new(
            Icon::new(IconSet::Undefined, "custom glyph", 0),
            Icon::new(IconSet::Undefined, "Beta_Custom", 0),
        ));
        input.push(IconMapping::new(
            Icon::new(IconSet::Undefined, "custom glyph", 0),
            Icon::new(IconSet::Undefined, "Alpha_Custom", 0),
        ));

        let result = rebuild(&input).unwrap();
        let alpha = result.find_by_destination_name("Alpha_Custom", false)[0];
        let beta = result.find_by_destination_name("Beta_Custom", false)[0];
        assert_eq!(SYNTHETIC_CODE_POINT_BASE, alpha.destination.code_point);
        assert_eq!(SYNTHETIC_CODE_POINT_BASE + 1, beta.destination.code_point);
    }

    #[test]
    fn intermediate_sources_are_redirected_then_normalized() {
        let mut input = composite();
        for mapping in input.iter_mut() {
            if mapping.destination.name == "Add" {
                mapping.source = icon_named(IconSet::SegoeMDL2Assets, "Add");
            }
        }

        let mut redirects = MappingList::new();
        redirects.push(IconMapping::new(
            icon_named(IconSet::FluentUISystemRegular, "ic_fluent_add_24_regular"),
            icon_named(IconSet::SegoeMDL2Assets, "Add"),
        ));

        let result = rebuild_symbol_mappings(
            &input,
            &redirects,
            &legacy_translations(),
            Some(&CatalogGlyphProbe),
        )
        .unwrap();
        let add = result.find_by_destination_name("Add", false)[0];
        // redirected to the 24px source, then normalized down to 20
        assert_eq!("ic_fluent_add_20_regular", add.source.name);
    }

    #[test]
    fn unredirectable_intermediate_source_is_fatal() {
        let mut input = composite();
        for mapping in input.iter_mut() {
            if mapping.destination.name == "Add" {
                mapping.source = icon_named(IconSet::SegoeMDL2Assets, "Add");
            }
        }
        let error = rebuild(&input).unwrap_err();
        assert!(matches!(
            error,
            ReconcileError::AmbiguousTranslation { matches: 0, .. }
        ));
    }

    #[test]
    fn missing_symbol_coverage_is_a_named_error() {
        let input: MappingList = composite()
            .into_iter()
            .filter(|m| m.destination.name != "Camera")
            .collect();
        let error = rebuild(&input).unwrap_err();
        assert!(matches!(
            error,
            ReconcileError::MissingEnumerationCoverage {
                symbol: Symbol::Camera,
                ..
            }
        ));
    }

    #[test]
    fn ambiguous_legacy_translation_is_fatal() {
        let mut translations = legacy_translations();
        translations.push(IconMapping::new(
            icon_named(IconSet::SegoeUISymbol, "Add"),
            icon_named(IconSet::SegoeFluent, "Add"),
        ));
        let error = rebuild_symbol_mappings(
            &composite(),
            &MappingList::new(),
            &translations,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            ReconcileError::AmbiguousTranslation { matches: 2, .. }
        ));
    }

    #[test]
    fn missing_legacy_translation_is_fatal() {
        let translations: MappingList = legacy_translations()
            .into_iter()
            .filter(|m| m.source.name != "Add")
            .collect();
        let error =
            rebuild_symbol_mappings(&composite(), &MappingList::new(), &translations, None)
                .unwrap_err();
        assert!(matches!(
            error,
            ReconcileError::AmbiguousTranslation { matches: 0, .. }
        ));
    }

    #[test]
    fn duplicate_destination_code_point_is_fatal() {
        let mut input = composite();
        let duplicate = input.find_by_destination_name("Add", false)[0].clone();
        input.push(duplicate);
        let error = rebuild(&input).unwrap_err();
        assert!(matches!(
            error,
            ReconcileError::DuplicateDestination {
                what: "code point",
                ..
            }
        ));
    }

    #[test]
    fn unbuildable_source_is_fatal() {
        let mut input = composite();
        input.push(IconMapping::new(
            // catalog set but no code point: not buildable
            Icon::new(IconSet::LineAwesomeSolid, "heart", 0),
            Icon::new(IconSet::Undefined, "CustomThing", 0x3000),
        ));
        let error = rebuild(&input).unwrap_err();
        assert!(matches!(error, ReconcileError::InvalidFontSource(_)));
    }

    #[test]
    fn probe_rejection_is_fatal() {
        struct RejectAll;
        impl GlyphSourceProbe for RejectAll {
            fn can_build_font(&self, _: IconSet, _: u32) -> bool {
                false
            }
        }
        let error = rebuild_symbol_mappings(
            &composite(),
            &MappingList::new(),
            &legacy_translations(),
            Some(&RejectAll),
        )
        .unwrap_err();
        assert!(matches!(error, ReconcileError::InvalidFontSource(_)));
    }

    #[test]
    fn mangled_source_names_do_not_derail_a_rebuild() {
        let mut input = composite();
        // loadable lists can carry arbitrary source names, non-ASCII included
        input.push(IconMapping::new(
            Icon::new(IconSet::FluentUISystemRegular, "éegular", 0xF101),
            Icon::new(IconSet::Undefined, "CustomThing", 0x3000),
        ));
        let result = rebuild(&input).unwrap();
        let custom = result.find_by_destination_name("CustomThing", false)[0];
        // reprocessing restores the catalog name for the code point
        assert_eq!("ic_fluent_add_20_regular", custom.source.name);
    }

    #[test]
    fn undefined_sources_may_lack_a_renderable_glyph() {
        let mut input = composite();
        input.push(IconMapping::new(
            Icon::new(IconSet::Undefined, "hand drawn glyph", 0),
            Icon::new(IconSet::Undefined, "CustomThing", 0x3000),
        ));
        let result = rebuild(&input).unwrap();
        assert_eq!(
            1,
            result.find_by_destination_name("CustomThing", false).len()
        );
    }
}
