use crate::{
    field::{Field, FieldValue},
    utils, Schedule,
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use log::warn;
use std::iter::FusedIterator;

/// Position in the calendar cross-product of schedule values.
///
/// `month`, `hour` and `minute` are indexes in the ascending lists of allowed values,
/// index equal to the list length means the list is exhausted.
/// `day` is the calendar day itself since both day fields take part in its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Cursor {
    year: i32,
    month: usize,
    day: FieldValue,
    hour: usize,
    minute: usize,
}

impl Cursor {
    /// Moves to the first possible moment of the next year.
    ///
    /// Returns `false` if the year can't be represented by calendar.
    #[inline]
    fn inc_year(&mut self) -> bool {
        let Some(year) = self
            .year
            .checked_add(1)
            .filter(|year| NaiveDate::from_ymd_opt(*year, 1, 1).is_some())
        else {
            return false;
        };

        *self = Self {
            year,
            month: 0,
            day: 1,
            hour: 0,
            minute: 0,
        };
        true
    }

    /// Moves to the first day of the next allowed month.
    #[inline]
    fn inc_month(&mut self) {
        self.month += 1;
        self.day = 1;
        self.hour = 0;
        self.minute = 0;
    }

    /// Moves to the first allowed time of the next day.
    #[inline]
    fn inc_day(&mut self) {
        self.day += 1;
        self.hour = 0;
        self.minute = 0;
    }

    /// Moves to the first allowed minute of the next allowed hour.
    #[inline]
    fn inc_hour(&mut self) {
        self.hour += 1;
        self.minute = 0;
    }

    #[inline]
    fn inc_minute(&mut self) {
        self.minute += 1;
    }
}

/// Index of the first value which is not less than `target`.
#[inline]
fn first_at_least(values: &[FieldValue], target: u32) -> usize {
    values.partition_point(|value| u32::from(*value) < target)
}

/// Lazy generator of schedule events in the time zone of the starting instant.
#[derive(Clone)]
pub(crate) struct Upcoming<Tz: TimeZone> {
    schedule: Schedule,
    timezone: Tz,
    months: Vec<FieldValue>,
    hours: Vec<FieldValue>,
    minutes: Vec<FieldValue>,
    // `None` when the search is over.
    cursor: Option<Cursor>,
    last: DateTime<Tz>,
    horizon: u32,
    barren_years: u32,
    // Current year is a whole one without events so far.
    year_counts: bool,
}

impl<Tz: TimeZone> Upcoming<Tz> {
    /// Creates generator of events strictly after `after`.
    ///
    /// Generator stops after `horizon` consecutive whole calendar years without a single event,
    /// the starting year and years with events don't count.
    pub(crate) fn new(schedule: Schedule, after: &DateTime<Tz>, horizon: u32) -> Self {
        let months = schedule.values(Field::Month);
        let hours = schedule.values(Field::Hour);
        let minutes = schedule.values(Field::Minute);

        let cursor = search_floor(&after.naive_local()).map(|floor| seek(&floor, &months, &hours, &minutes));

        Self {
            schedule,
            timezone: after.timezone(),
            months,
            hours,
            minutes,
            cursor,
            last: after.clone(),
            horizon,
            barren_years: 0,
            year_counts: false,
        }
    }
}

/// The earliest wall time which may be returned: start of the minute following `after`.
fn search_floor(after: &NaiveDateTime) -> Option<NaiveDateTime> {
    after
        .date()
        .and_hms_opt(after.hour(), after.minute(), 0)?
        .checked_add_signed(TimeDelta::minutes(1))
}

/// Places cursor at the first cross-product position which isn't earlier than `floor`.
///
/// Day fields aren't checked here, the generator skips non-matching days itself.
fn seek(floor: &NaiveDateTime, months: &[FieldValue], hours: &[FieldValue], minutes: &[FieldValue]) -> Cursor {
    let mut cursor = Cursor {
        year: floor.year(),
        month: first_at_least(months, floor.month()),
        day: 1,
        hour: 0,
        minute: 0,
    };
    if months.get(cursor.month).map(|m| u32::from(*m)) != Some(floor.month()) {
        return cursor;
    }

    cursor.day = floor.day() as FieldValue;
    cursor.hour = first_at_least(hours, floor.hour());
    if hours.get(cursor.hour).map(|h| u32::from(*h)) != Some(floor.hour()) {
        return cursor;
    }

    cursor.minute = first_at_least(minutes, floor.minute());
    cursor
}

impl<Tz: TimeZone> Iterator for Upcoming<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cursor = self.cursor.as_mut()?;

            if cursor.month >= self.months.len() {
                if self.year_counts {
                    self.barren_years += 1;
                }
                self.year_counts = true;
                if self.barren_years >= self.horizon || !cursor.inc_year() {
                    warn!(
                        "no events of [{}] within {} consecutive years",
                        self.schedule, self.barren_years
                    );
                    self.cursor = None;
                    return None;
                }
                continue;
            }

            let month = self.months[cursor.month];
            if cursor.day > utils::days_in_month(cursor.year, month) {
                cursor.inc_month();
                continue;
            }
            if !self.schedule.day_matches(cursor.year, month, cursor.day) {
                cursor.inc_day();
                continue;
            }
            if cursor.hour >= self.hours.len() {
                cursor.inc_day();
                continue;
            }
            if cursor.minute >= self.minutes.len() {
                cursor.inc_hour();
                continue;
            }

            let (year, day) = (cursor.year, cursor.day);
            let (hour, minute) = (self.hours[cursor.hour], self.minutes[cursor.minute]);
            cursor.inc_minute();

            // Wall times skipped by a DST transition don't exist,
            // ambiguous ones map to the earliest instant which is later than the previous one.
            let mapped = self
                .timezone
                .with_ymd_and_hms(year, month.into(), day.into(), hour.into(), minute.into(), 0);
            let Some(candidate) = mapped
                .clone()
                .earliest()
                .filter(|earliest| *earliest > self.last)
                .or_else(|| mapped.latest().filter(|latest| *latest > self.last))
            else {
                continue;
            };

            self.barren_years = 0;
            self.year_counts = false;
            self.last = candidate.clone();
            return Some(candidate);
        }
    }
}

impl<Tz: TimeZone> FusedIterator for Upcoming<Tz> {}
