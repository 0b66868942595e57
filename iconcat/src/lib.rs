//! Icon set catalogs and name handling for building substitute icon fonts.
//!
//! A catalog is a read-only registry mapping a set-local code point to a
//! canonical icon name. Catalogs for the bundled icon sets are built lazily,
//! once, and never mutated afterwards.

pub mod catalog;
mod data;
pub mod error;
pub mod fallback;
pub mod names;

pub use catalog::{all_icons, lookup_name, Icon, IconSet};
