use crate::field::{Field, FieldValue, TokenValue};
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Expression doesn't split into exactly five space separated fields.
    #[error("schedule should have 5 fields but found {0}")]
    WrongFieldCount(usize),
    /// Field is an empty string, usually caused by a doubled space.
    #[error("received empty value for field {0}")]
    EmptyField(Field),
    /// Token matches none of the supported value formats.
    #[error("failed to parse {field} field: [{token}] is not in a supported field value format")]
    UnsupportedFieldFormat {
        /// Field the token belongs to.
        field: Field,
        /// Offending token.
        token: String,
    },
    /// Step value of the token is zero.
    #[error("failed to parse {field} field: interval of [{token}] cannot be <= 0")]
    InvalidInterval {
        /// Field the token belongs to.
        field: Field,
        /// Offending token.
        token: String,
    },
    /// Range start is greater than range end.
    #[error("failed to parse {field} field: range start value of [{start}] is larger than range end value of [{end}] in [{token}]")]
    InvalidRange {
        /// Field the token belongs to.
        field: Field,
        /// Offending token.
        token: String,
        /// Range start.
        start: TokenValue,
        /// Range end.
        end: TokenValue,
    },
    /// Range bounds fall outside the field's domain.
    #[error("failed to parse {field} field: range [{start}-{end}] of [{token}] is outside of allowed values [{min}-{max}]")]
    OutOfDomain {
        /// Field the token belongs to.
        field: Field,
        /// Offending token.
        token: String,
        /// Range start.
        start: TokenValue,
        /// Range end.
        end: TokenValue,
        /// Minimal value allowed by the field.
        min: FieldValue,
        /// Maximal value allowed by the field.
        max: FieldValue,
    },
    /// Search ran through the whole horizon without collecting the requested number of events.
    #[error("no execution time found within {horizon} consecutive years")]
    NoFeasibleExecution {
        /// Number of consecutive years searched without a single match.
        horizon: u32,
    },
}
