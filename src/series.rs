/// Generator of field value series.
use crate::{
    field::{Field, FieldValue, TokenValue},
    CronError, Result,
};

/// Returns every value of `start..=end` with the `step` increment,
/// after validating the bounds against the `field` domain.
///
/// `token` is used only for error reporting.
pub(crate) fn generate(
    field: Field,
    token: &str,
    start: TokenValue,
    end: TokenValue,
    step: TokenValue,
) -> Result<Vec<FieldValue>> {
    if step == 0 {
        return Err(CronError::InvalidInterval {
            field,
            token: token.to_owned(),
        });
    }

    if start > end {
        return Err(CronError::InvalidRange {
            field,
            token: token.to_owned(),
            start,
            end,
        });
    }

    // Both bounds are checked at once: start > max or end < min can't pass the check above.
    let (min, max) = field.min_max();
    if start < TokenValue::from(min) || end > TokenValue::from(max) {
        return Err(CronError::OutOfDomain {
            field,
            token: token.to_owned(),
            start,
            end,
            min,
            max,
        });
    }

    Ok(SeriesWithStep::new(start, end, step)
        .filter_map(|value| FieldValue::try_from(value).ok())
        .collect())
}

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SeriesWithStep {
    next: Option<TokenValue>,
    end: TokenValue,
    step: TokenValue,
}

impl SeriesWithStep {
    /// Caller is responsible for bounds validation.
    ///
    /// Panics if the step is zero or the range is reversed.
    #[inline]
    fn new(start: TokenValue, end: TokenValue, step: TokenValue) -> Self {
        assert!(step > 0, "step value is 0");
        assert!(start <= end, "start value {start} is greater than end value {end}");

        Self {
            next: Some(start),
            end,
            step,
        }
    }
}

impl Iterator for SeriesWithStep {
    type Item = TokenValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|value| *value <= self.end)?;
        self.next = current.checked_add(self.step);
        Some(current)
    }
}
