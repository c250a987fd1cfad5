use crate::{series, CronError, Result};
use std::{collections::BTreeSet, fmt::Display};

/// Type of a single field value: minute, hour, day, etc.
pub type FieldValue = u16;

/// Number as written in a token, before the domain check.
pub type TokenValue = u32;

/// One of the five fields of a cron expression, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Minute of the hour, `0-59`.
    Minute = 0,
    /// Hour of the day, `0-23`.
    Hour = 1,
    /// Day of the month, `1-31`.
    DayOfMonth = 2,
    /// Month of the year, `1-12`.
    Month = 3,
    /// Day of the week, `0-6`, Sunday is `0`.
    DayOfWeek = 4,
}

impl Field {
    /// All fields in the order they appear in the expression.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Returns minimal and maximal values allowed by the field.
    pub const fn min_max(self) -> (FieldValue, FieldValue) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
        }
    }

    /// Human-readable name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single comma-separated token of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FieldToken {
    // *
    All,
    // */step
    AllWithStep(TokenValue),
    // start-end
    Range(TokenValue, TokenValue),
    // start-end/step
    RangeWithStep(TokenValue, TokenValue, TokenValue),
    // start/step
    ValueWithStep(TokenValue, TokenValue),
    Particular(TokenValue),
}

impl FieldToken {
    /// Recognizes one of the supported token formats.
    ///
    /// Returns `None` if the input matches none of them.
    pub(crate) fn classify(input: &str) -> Option<Self> {
        if input == "*" {
            return Some(Self::All);
        }
        if let Some(step) = input.strip_prefix("*/") {
            return parse_number(step).map(Self::AllWithStep);
        }

        let (base, step) = match input.split_once('/') {
            Some((base, step)) => (base, Some(parse_number(step)?)),
            None => (input, None),
        };

        match (base.split_once('-'), step) {
            (Some((start, end)), None) => Some(Self::Range(parse_number(start)?, parse_number(end)?)),
            (Some((start, end)), Some(step)) => Some(Self::RangeWithStep(
                parse_number(start)?,
                parse_number(end)?,
                step,
            )),
            (None, Some(step)) => Some(Self::ValueWithStep(parse_number(base)?, step)),
            (None, None) => Some(Self::Particular(parse_number(base)?)),
        }
    }

    /// Returns `(start, end, step)` of the series the token denotes within the `field`.
    fn bounds(self, field: Field) -> (TokenValue, TokenValue, TokenValue) {
        let (min, max) = field.min_max();
        let (min, max) = (TokenValue::from(min), TokenValue::from(max));
        match self {
            Self::All => (min, max, 1),
            Self::AllWithStep(step) => (min, max, step),
            Self::Range(start, end) => (start, end, 1),
            Self::RangeWithStep(start, end, step) => (start, end, step),
            Self::ValueWithStep(start, step) => (start, max, step),
            Self::Particular(value) => (value, value, 1),
        }
    }
}

/// Converts a non-empty string of ASCII digits into a number.
///
/// Returns `None` for anything else, including numbers too large for [`TokenValue`].
fn parse_number(input: &str) -> Option<TokenValue> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    input.parse().ok()
}

/// Parses a single token of the `field` and returns all values it denotes.
pub(crate) fn parse_field_value(field: Field, token: &str) -> Result<Vec<FieldValue>> {
    let (start, end, step) = FieldToken::classify(token)
        .ok_or_else(|| CronError::UnsupportedFieldFormat {
            field,
            token: token.to_owned(),
        })?
        .bounds(field);

    series::generate(field, token, start, end, step)
}

/// Parsed field: original tokens and the set of accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct FieldSet {
    tokens: Vec<String>,
    values: BTreeSet<FieldValue>,
}

impl FieldSet {
    pub(crate) fn parse(field: Field, input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CronError::EmptyField(field));
        }

        let mut tokens = Vec::new();
        let mut values = BTreeSet::new();
        for token in input.split(',') {
            values.extend(parse_field_value(field, token)?);
            tokens.push(token.to_owned());
        }

        Ok(Self { tokens, values })
    }

    #[inline]
    pub(crate) fn contains(&self, value: FieldValue) -> bool {
        self.values.contains(&value)
    }

    /// Accepted values in ascending order.
    pub(crate) fn ascending(&self) -> Vec<FieldValue> {
        self.values.iter().copied().collect()
    }

    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `true` if the field was given literally as `*`.
    pub(crate) fn is_wildcard(&self) -> bool {
        self.tokens.len() == 1 && self.tokens[0] == "*"
    }

    /// Drops all accepted values, tokens stay for display.
    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}
