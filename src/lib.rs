//! Five-field cron expression parser and next execution time generator.
#![deny(unsafe_code, missing_docs)]

//! This crate is intended to:
//! - parse and validate classic five-field cron schedule expressions;
//! - compute the next execution times of a schedule after a given instant.
//!
//! _This is not a cron jobs scheduler or runner._
//!
//! ## Cron schedule format
//!
//! Expression consists of exactly five fields separated by single spaces:
//! minutes, hours, days of month, months and days of week.
//! Leading and trailing whitespace is ignored.
//!
//! | Field        | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------------------|
//! | Minutes      | 0-59           | * , - /                    |
//! | Hours        | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - /                    |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-6, Sunday=0  | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `*/15,7`;
//! - `-` - range of values, i.e. `0-15`;
//! - `/` - repeating values, i.e. `*/12`, `10/5` (up to the field maximum), `30-59/2`.
//!
//! Names (`MON`, `JAN`), `L`, `W`, `#`, `?` and `@`-aliases are not supported.
//!
//! ### Day of month and day of week
//!
//! The day fields are combined the traditional way:
//! - if both of them are `*`, every day matches;
//! - if only one of them is `*`, it's ignored and the other one alone restricts days;
//! - if both of them are restricted, a day matching **any** of them matches.
//!
//! A field is treated as `*` only if it's written literally as `*`, so `*/1` restricts days.
//!
//! ## How to use
//!
//! The central entity of the crate is a [`Schedule`] structure:
//! - [new()](Schedule::new) or [parse()]: parse and validate provided expression;
//! - [next_execution()](Schedule::next_execution): time of the next event strictly after the provided instant;
//! - [next_executions()](Schedule::next_executions): times of several next events;
//! - [iter()](Schedule::iter): an `Iterator` which produces a series of events lazily;
//! - [matches()](Schedule::matches): tests whether an instant satisfies the schedule.
//!
//! All times are computed in the time zone of the provided instant, with minute granularity.
//!
//! ### Example with `next_executions`
//! ```rust
//! use chrono::{DateTime, FixedOffset};
//! use cron_next::{Result, Schedule};
//!
//! fn next_executions() -> Result<()> {
//!     let schedule = Schedule::new("0 22 * * 1-5")?;
//!     let after = DateTime::parse_from_rfc3339("2020-07-24T22:00:00+00:00").unwrap();
//!
//!     let next = schedule.next_executions(&after, 2)?;
//!     assert_eq!(next[0].to_rfc3339(), "2020-07-27T22:00:00+00:00");
//!     assert_eq!(next[1].to_rfc3339(), "2020-07-28T22:00:00+00:00");
//!
//!     Ok(())
//! }
//! # next_executions().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use cron_next::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = cron_next::parse("*/15 9-17 * * *")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 timestamps starting from now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! ### Schedules without events
//!
//! Some valid expressions never fire, like `0 0 30 2 *`. The search gives up after
//! [`DEFAULT_SEARCH_HORIZON_YEARS`] consecutive whole calendar years without a single event and returns
//! [`CronError::NoFeasibleExecution`], iterators just end.
//!
//! # Logging
//! The crate logs through the [log](https://crates.io/crates/log) facade:
//! parsed expressions and day fields resolution at `debug`, queries at `trace`
//! and exhausted searches at `warn` level.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].

/// Crate specific Error implementation.
pub mod error;
/// Cron expression fields and their domains.
pub mod field;
/// Cron schedule parser and next execution times generator.
pub mod schedule;
mod series;
mod upcoming;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use field::{Field, FieldValue, TokenValue};
pub use schedule::{Schedule, DEFAULT_SEARCH_HORIZON_YEARS};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;

/// Parses and validates cron `expression`.
///
/// Same as [`Schedule::new`].
#[inline]
pub fn parse(expression: &str) -> Result<Schedule> {
    Schedule::new(expression)
}
