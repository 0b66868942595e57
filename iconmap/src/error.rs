use iconcat::Icon;
use smol_str::SmolStr;
use thiserror::Error;

use crate::{mapping::IconMapping, symbol::Symbol};

/// Fatal reconciliation failures.
///
/// Any of these aborts the whole rebuild; no partial composite list is ever
/// returned. Each variant names the invariant that failed and the record
/// that triggered it.
#[derive(Debug, Clone, Error)]
pub enum ReconcileError {
    #[error("{stage}: {matches} translation entries match {icon:?}, exactly one required")]
    AmbiguousTranslation {
        stage: &'static str,
        icon: Icon,
        matches: usize,
    },
    #[error("symbol {symbol} (0x{value:04X}) has no composite entry")]
    MissingEnumerationCoverage { symbol: Symbol, value: u32 },
    #[error("duplicate destination {what} in {mapping:?}")]
    DuplicateDestination {
        what: &'static str,
        mapping: IconMapping,
    },
    #[error("source of {0:?} cannot be used for a font build")]
    InvalidFontSource(IconMapping),
}

/// Per-record problems encountered while converting serialized records.
///
/// These are recoverable: the offending record is skipped and the rest of
/// the list still loads. The caller decides whether to proceed.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("unknown icon set '{0}'")]
    UnknownIconSet(SmolStr),
    #[error("unknown match quality '{0}'")]
    UnknownMatchQuality(SmolStr),
}
