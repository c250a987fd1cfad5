use crate::{
    field::{Field, FieldSet, FieldValue},
    upcoming::Upcoming,
    utils, CronError, Result,
};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use log::{debug, trace};
use std::{fmt::Display, str::FromStr};

/// Number of consecutive years without a single event after which the search gives up.
///
/// The Gregorian calendar repeats itself every 400 years,
/// so a schedule without events during the whole cycle never fires.
pub const DEFAULT_SEARCH_HORIZON_YEARS: u32 = 400;

/// Represents a parsed cron schedule with its methods.
///
/// For cron schedule clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    source: String,
    minute: FieldSet,
    hour: FieldSet,
    dom: FieldSet,
    month: FieldSet,
    dow: FieldSet,
}

impl Schedule {
    /// Parses and validates provided `pattern` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided pattern is unparsable or has out of range values.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let source = pattern.trim();

        let fields: Vec<&str> = source.split(' ').collect();
        let &[minute, hour, dom, month, dow] = fields.as_slice() else {
            return Err(CronError::WrongFieldCount(fields.len()));
        };

        let mut schedule = Self {
            source: source.to_owned(),
            minute: FieldSet::parse(Field::Minute, minute)?,
            hour: FieldSet::parse(Field::Hour, hour)?,
            dom: FieldSet::parse(Field::DayOfMonth, dom)?,
            month: FieldSet::parse(Field::Month, month)?,
            dow: FieldSet::parse(Field::DayOfWeek, dow)?,
        };
        schedule.resolve_days();

        debug!("parsed cron schedule [{}]", schedule.source);
        Ok(schedule)
    }

    /// Applies POSIX rule to day of month and day of week fields:
    /// if only one of them is restricted, the other one is ignored,
    /// if both are restricted, a day matching any of them is accepted.
    fn resolve_days(&mut self) {
        match (self.dom.is_wildcard(), self.dow.is_wildcard()) {
            (true, false) => {
                debug!("day of month is ignored in [{}]", self.source);
                self.dom.clear();
            }
            (false, true) => {
                debug!("day of week is ignored in [{}]", self.source);
                self.dow.clear();
            }
            (true, true) | (false, false) => {}
        }
    }

    /// Returns `true` if the `instant` satisfies the schedule.
    ///
    /// Seconds and fractions of the `instant` are ignored.
    pub fn matches<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.minute.contains(instant.minute() as FieldValue)
            && self.hour.contains(instant.hour() as FieldValue)
            && self.month.contains(instant.month() as FieldValue)
            && self.day_matches(
                instant.year(),
                instant.month() as FieldValue,
                instant.day() as FieldValue,
            )
    }

    /// Same as [`matches`](Schedule::matches) for the current local time.
    pub fn matches_now(&self) -> bool {
        self.matches(&Local::now())
    }

    /// Tests the day against both day fields.
    pub(crate) fn day_matches(&self, year: i32, month: FieldValue, day: FieldValue) -> bool {
        self.dom.contains(day)
            || utils::day_of_week(year, month, day).is_some_and(|dow| self.dow.contains(dow))
    }

    /// Returns time of the first event strictly after `after`, with minute granularity.
    ///
    /// Returns [`CronError::NoFeasibleExecution`] if the schedule never fires.
    pub fn next_execution<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let mut executions = self.next_executions(after, 1)?;
        executions.pop().ok_or(CronError::NoFeasibleExecution {
            horizon: DEFAULT_SEARCH_HORIZON_YEARS,
        })
    }

    /// Same as [`next_execution`](Schedule::next_execution) starting from the current local time.
    pub fn upcoming_from_now(&self) -> Result<DateTime<Local>> {
        self.next_execution(&Local::now())
    }

    /// Returns times of the next `count` events after `after` in ascending order.
    ///
    /// Returns [`CronError::NoFeasibleExecution`] if there are fewer than `count` events
    /// before the search runs through [`DEFAULT_SEARCH_HORIZON_YEARS`] years without any event.
    #[inline]
    pub fn next_executions<Tz: TimeZone>(&self, after: &DateTime<Tz>, count: usize) -> Result<Vec<DateTime<Tz>>> {
        self.next_executions_within(after, count, DEFAULT_SEARCH_HORIZON_YEARS)
    }

    /// Same as [`next_executions`](Schedule::next_executions) with a custom search horizon:
    /// the search stops after `horizon_years` consecutive whole calendar years without a single event.
    ///
    /// The year of `after` is never counted as barren since only its remainder is searched.
    pub fn next_executions_within<Tz: TimeZone>(
        &self,
        after: &DateTime<Tz>,
        count: usize,
        horizon_years: u32,
    ) -> Result<Vec<DateTime<Tz>>> {
        trace!("looking for {count} events of [{}] after {after:?}", self.source);

        let executions: Vec<DateTime<Tz>> = self.iter_within(after, horizon_years).take(count).collect();
        if executions.len() < count {
            return Err(CronError::NoFeasibleExecution { horizon: horizon_years });
        }

        Ok(executions)
    }

    /// Returns iterator of events strictly after `after`.
    ///
    /// The iterator ends if [`DEFAULT_SEARCH_HORIZON_YEARS`] years pass without any event.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        self.iter_within(after, DEFAULT_SEARCH_HORIZON_YEARS)
    }

    /// Same as [`iter`](Schedule::iter) with a custom search horizon.
    #[inline]
    pub fn iter_within<Tz: TimeZone>(
        &self,
        after: &DateTime<Tz>,
        horizon_years: u32,
    ) -> impl Iterator<Item = DateTime<Tz>> {
        Upcoming::new(self.clone(), after, horizon_years)
    }

    /// Consumes [`Schedule`] and returns iterator of events strictly after `after`.
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        Upcoming::new(self, after, DEFAULT_SEARCH_HORIZON_YEARS)
    }

    /// Returns multi-line human-readable description of the schedule:
    /// original tokens and resolved values of each field.
    pub fn describe(&self) -> String {
        let mut description = format!("{:<16}[{}]\n", "Cron schedule:", self.source);
        for field in Field::ALL {
            let set = self.field(field);
            let label = format!("{}:", field.name());
            description.push_str(&format!("{label:<16}{:?} => {:?}\n", set.tokens(), set.ascending()));
        }

        description
    }

    /// Trimmed source expression.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Accepted values of the `field` in ascending order.
    ///
    /// Day fields are returned after applying day of month/day of week rule,
    /// so one of them may be empty.
    pub fn values(&self, field: Field) -> Vec<FieldValue> {
        self.field(field).ascending()
    }

    /// Original comma-separated tokens of the `field`.
    pub fn tokens(&self, field: Field) -> &[String] {
        self.field(field).tokens()
    }

    fn field(&self, field: Field) -> &FieldSet {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.dom,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.dow,
        }
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.source
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
