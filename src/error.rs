use thiserror::Error;

use crate::value::FilterValue;

/// Everything that can go wrong inside the filtering core.
///
/// All conditions are local and recoverable: a failed operation reports to
/// the immediate caller and leaves prior state unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A mutation referenced a value outside the filter's legal set.
    #[error("value {value} is not defined for filter '{key}'")]
    UndefinedValue { key: String, value: FilterValue },

    /// A lookup or update referenced a key absent from the collection.
    #[error("no filter with key '{0}'")]
    FilterNotFound(String),

    /// Strict raw-map conversion met an unrecognized field or a value with no
    /// scalar form. The permissive builders drop such entries instead.
    #[error("raw filter conversion failed: {0}")]
    RawConversion(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
