//! Nearest-size substitution for icon variants missing from a catalog.

use crate::{
    catalog::{self, Icon, IconSet},
    names::{IconName, IconSize, IconTheme},
};

/// Find the catalog icon closest to the desired (base, theme, size) variant.
///
/// An exact match wins immediately. Otherwise every icon of the same base and
/// theme is a candidate and the one with the smallest numeric size distance
/// is chosen; among equal-distance candidates the first in catalog
/// enumeration order wins. The result is stable across calls because both
/// enumeration order and the tie-break are deterministic.
pub fn find_best(
    icon_set: IconSet,
    base: &str,
    theme: IconTheme,
    desired_size: IconSize,
) -> Option<Icon> {
    let mut best: Option<(Icon, u32)> = None;
    for icon in catalog::all_icons(icon_set) {
        let parsed = IconName::parse(&icon.name);
        if parsed.base != base || parsed.theme != theme {
            continue;
        }
        if parsed.size == desired_size {
            return Some(icon);
        }
        let distance = parsed.size.value().abs_diff(desired_size.value());
        match &best {
            // strictly better only; an equal distance keeps the earlier hit
            Some((_, best_distance)) if *best_distance <= distance => {}
            _ => best = Some((icon, distance)),
        }
    }
    best.map(|(icon, _)| icon)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exact_size_wins() {
        let icon = find_best(
            IconSet::FluentUISystemRegular,
            "add",
            IconTheme::Regular,
            IconSize::Size24,
        )
        .unwrap();
        assert_eq!("ic_fluent_add_24_regular", icon.name);
    }

    #[test]
    fn nearest_size_when_exact_is_missing() {
        // print exists at 16 and 24 only; 16 is nearer to 12 than 24 is
        let icon = find_best(
            IconSet::FluentUISystemRegular,
            "print",
            IconTheme::Regular,
            IconSize::Size12,
        )
        .unwrap();
        assert_eq!("ic_fluent_print_16_regular", icon.name);
    }

    #[test]
    fn equal_distance_keeps_the_first_enumerated() {
        // home filled exists at 16, 24 and 32; 16 and 24 tie at distance 4
        // from 20 and 16 is enumerated first
        for _ in 0..3 {
            let icon = find_best(
                IconSet::FluentUISystemFilled,
                "home",
                IconTheme::Filled,
                IconSize::Size20,
            )
            .unwrap();
            assert_eq!("ic_fluent_home_16_filled", icon.name);
        }
    }

    #[test]
    fn theme_is_never_substituted() {
        // heart only exists filled
        assert_eq!(
            None,
            find_best(
                IconSet::FluentUISystemFilled,
                "heart",
                IconTheme::Regular,
                IconSize::Size20,
            )
        );
    }

    #[test]
    fn unknown_base_finds_nothing() {
        assert_eq!(
            None,
            find_best(
                IconSet::FluentUISystemRegular,
                "nonexistent",
                IconTheme::Regular,
                IconSize::Size20,
            )
        );
    }
}
