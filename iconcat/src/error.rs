use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Unknown icon set '{0}'")]
    UnknownIconSet(SmolStr),
}
