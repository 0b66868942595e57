//! Parsing and formatting of Fluent UI System icon names.
//!
//! Names are structured as `[ic_fluent_]{base}_{size}_{theme}`, e.g.
//! `ic_fluent_arrow_left_20_regular` (Android convention) or
//! `arrow_left_20_regular` (iOS convention). Parsing is a deterministic
//! suffix/prefix stripping pipeline; components that cannot be detected fall
//! back to defined defaults rather than failing.

use std::fmt::Display;

use smol_str::SmolStr;

const ANDROID_PREFIX: &str = "ic_fluent_";
const SEPARATOR: char = '_';

/// The platform naming convention a raw icon name was written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    Android,
    #[default]
    Ios,
}

/// The visual theme of a Fluent UI System icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconTheme {
    #[default]
    Regular,
    Filled,
    Light,
}

impl IconTheme {
    pub fn all() -> &'static [IconTheme; 3] {
        &[IconTheme::Regular, IconTheme::Filled, IconTheme::Light]
    }

    /// The lowercase suffix used in raw names.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconTheme::Regular => "regular",
            IconTheme::Filled => "filled",
            IconTheme::Light => "light",
        }
    }
}

impl Display for IconTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The enumerated Fluent UI System icon sizes.
///
/// Size detection checks exact full-suffix equality against this set, never
/// substrings, so e.g. a trailing "4" is not mistaken for "24".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum IconSize {
    Size10 = 10,
    Size12 = 12,
    Size16 = 16,
    #[default]
    Size20 = 20,
    Size24 = 24,
    Size28 = 28,
    Size32 = 32,
    Size48 = 48,
}

impl IconSize {
    pub fn all() -> &'static [IconSize; 8] {
        &[
            IconSize::Size10,
            IconSize::Size12,
            IconSize::Size16,
            IconSize::Size20,
            IconSize::Size24,
            IconSize::Size28,
            IconSize::Size32,
            IconSize::Size48,
        ]
    }

    pub fn value(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::Size10 => "10",
            IconSize::Size12 => "12",
            IconSize::Size16 => "16",
            IconSize::Size20 => "20",
            IconSize::Size24 => "24",
            IconSize::Size28 => "28",
            IconSize::Size32 => "32",
            IconSize::Size48 => "48",
        }
    }

    pub fn from_value(value: u32) -> Option<IconSize> {
        IconSize::all().iter().find(|size| size.value() == value).copied()
    }
}

/// The parsed components of a Fluent UI System icon name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconName {
    pub base: SmolStr,
    pub size: IconSize,
    pub theme: IconTheme,
    pub convention: NamingConvention,
}

impl IconName {
    /// Decompose a raw name into its components.
    ///
    /// Never fails: an undetected theme defaults to `Regular`, an undetected
    /// size to `Size20`, and whatever remains after stripping is the base
    /// metaphor.
    pub fn parse(raw: &str) -> IconName {
        let mut rest = raw;

        let convention = match rest.strip_prefix(ANDROID_PREFIX) {
            Some(stripped) => {
                rest = stripped;
                NamingConvention::Android
            }
            None => NamingConvention::Ios,
        };

        let mut theme = IconTheme::Regular;
        for candidate in IconTheme::all() {
            let suffix = candidate.as_str();
            if rest.len() < suffix.len() {
                continue;
            }
            // names are arbitrary strings; the cut must not split a char
            let cut = rest.len() - suffix.len();
            if rest.is_char_boundary(cut) && rest[cut..].eq_ignore_ascii_case(suffix) {
                rest = &rest[..cut];
                theme = *candidate;
                break;
            }
        }
        rest = rest.strip_suffix(SEPARATOR).unwrap_or(rest);

        let mut size = IconSize::Size20;
        for candidate in IconSize::all() {
            let digits = candidate.as_str();
            let Some(stripped) = rest.strip_suffix(digits) else {
                continue;
            };
            // the digits must be a whole component, not the tail of one
            if !stripped.is_empty() && !stripped.ends_with(SEPARATOR) {
                continue;
            }
            rest = stripped;
            size = *candidate;
            break;
        }
        rest = rest.strip_suffix(SEPARATOR).unwrap_or(rest);

        IconName {
            base: SmolStr::new(rest),
            size,
            theme,
            convention,
        }
    }

    /// Compose the raw name for the requested convention.
    pub fn format(&self, convention: NamingConvention) -> String {
        let prefix = match convention {
            NamingConvention::Android => ANDROID_PREFIX,
            NamingConvention::Ios => "",
        };
        format!(
            "{prefix}{}_{}_{}",
            self.base,
            self.size.as_str(),
            self.theme.as_str()
        )
    }

    /// The raw name in the convention the name was parsed from.
    pub fn raw(&self) -> String {
        self.format(self.convention)
    }

    /// A copy of this name resized to `size`.
    pub fn with_size(&self, size: IconSize) -> IconName {
        IconName {
            size,
            ..self.clone()
        }
    }
}
