//! Core icon mapping engine.
//!
//! Builds, merges and repairs ordered lists of source to destination icon
//! mappings across icon sets, and reconciles several partial mapping sources
//! into one validated, gap-free composite list.

pub mod error;
pub mod list;
pub mod mapping;
pub mod probe;
pub mod reconcile;
pub mod serde;
pub mod symbol;

pub use list::MappingList;
pub use mapping::{IconMapping, MatchQuality};
pub use reconcile::rebuild_symbol_mappings;
pub use symbol::Symbol;
