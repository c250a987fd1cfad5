use chrono::{DateTime, FixedOffset, NaiveDateTime};
use cron_next::{CronError, Field, Schedule};
use rstest::rstest;
use std::time::Duration;

const OFFSET_SECONDS: i32 = 3 * 3600;

fn local(time: &str) -> DateTime<FixedOffset> {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_local_timezone(FixedOffset::east_opt(OFFSET_SECONDS).unwrap())
        .unwrap()
}

#[rstest]
#[case("0 22 * * 1-5", "2020-07-23 15:28:00", [
    "2020-07-23 22:00:00",
    "2020-07-24 22:00:00",
    "2020-07-27 22:00:00",
    "2020-07-28 22:00:00",
    "2020-07-29 22:00:00",
])]
#[case("5 0 * 8 *", "2020-07-23 15:29:00", [
    "2020-08-01 00:05:00",
    "2020-08-02 00:05:00",
    "2020-08-03 00:05:00",
    "2020-08-04 00:05:00",
    "2020-08-05 00:05:00",
])]
#[case("15 14 1 * *", "2020-07-23 15:29:00", [
    "2020-08-01 14:15:00",
    "2020-09-01 14:15:00",
    "2020-10-01 14:15:00",
    "2020-11-01 14:15:00",
    "2020-12-01 14:15:00",
])]
#[case("23 0-20/2 * * *", "2020-07-23 15:30:00", [
    "2020-07-23 16:23:00",
    "2020-07-23 18:23:00",
    "2020-07-23 20:23:00",
    "2020-07-24 00:23:00",
    "2020-07-24 02:23:00",
])]
#[case("0 4 8-14 * *", "2020-07-23 15:32:00", [
    "2020-08-08 04:00:00",
    "2020-08-09 04:00:00",
    "2020-08-10 04:00:00",
    "2020-08-11 04:00:00",
    "2020-08-12 04:00:00",
])]
#[case("23 0-20/2 * * 3,2,4,5", "2020-07-23 15:32:00", [
    "2020-07-23 16:23:00",
    "2020-07-23 18:23:00",
    "2020-07-23 20:23:00",
    "2020-07-24 00:23:00",
    "2020-07-24 02:23:00",
])]
#[case("* 1 10 * *", "2020-07-23 15:34:00", [
    "2020-08-10 01:00:00",
    "2020-08-10 01:01:00",
    "2020-08-10 01:02:00",
    "2020-08-10 01:03:00",
    "2020-08-10 01:04:00",
])]
#[case("10/2 2 1-2,30,3 1-5,8 1-5", "2020-07-23 17:16:00", [
    "2020-08-01 02:10:00",
    "2020-08-01 02:12:00",
    "2020-08-01 02:14:00",
    "2020-08-01 02:16:00",
    "2020-08-01 02:18:00",
])]
#[timeout(Duration::from_secs(1))]
fn next_five_executions(#[case] pattern: &str, #[case] after: &str, #[case] expected: [&str; 5]) {
    let schedule = Schedule::new(pattern).unwrap();
    let executions = schedule.next_executions(&local(after), 5).unwrap();

    let expected = expected.map(local);
    assert_eq!(executions, expected, "pattern = {pattern}, after = {after}");
    for execution in executions {
        assert_eq!(execution.offset().local_minus_utc(), OFFSET_SECONDS);
    }
}

#[rstest]
#[case("0 22 * * 1-5", "2020-07-23 15:28:00")]
#[case("* 1 10 * *", "2020-07-23 15:34:00")]
#[case("10/2 2 1-2,30,3 1-5,8 1-5", "2020-07-23 17:16:00")]
fn iterator_agrees_with_next_executions(#[case] pattern: &str, #[case] after: &str) {
    let schedule = Schedule::new(pattern).unwrap();
    let after = local(after);

    let from_iter = schedule.iter(&after).take(100).collect::<Vec<_>>();
    assert_eq!(from_iter, schedule.next_executions(&after, 100).unwrap());
    assert_eq!(from_iter, schedule.clone().into_iter(&after).take(100).collect::<Vec<_>>());

    // restarting from any event continues the same series
    assert_eq!(schedule.next_executions(&from_iter[41], 10).unwrap(), from_iter[42..52]);
}

#[rstest]
#[case("10-12 1,2,5,6 3/2 * *")]
#[case("  0 22 * * 1-5  ")]
fn parse_is_same_as_new(#[case] pattern: &str) {
    assert_eq!(cron_next::parse(pattern), Schedule::new(pattern));
    assert_eq!(cron_next::parse(pattern).unwrap().source(), pattern.trim());
}

#[rstest]
#[case("0 22 * * 1-5 *", "schedule should have 5 fields but found 6")]
#[case("0  22 * *", "received empty value for field hour")]
#[case("0 22 * * MON", "failed to parse day of week field: [MON] is not in a supported field value format")]
#[case("*/0 22 * * *", "failed to parse minute field: interval of [*/0] cannot be <= 0")]
#[case(
    "0 22-10 * * *",
    "failed to parse hour field: range start value of [22] is larger than range end value of [10] in [22-10]"
)]
#[case(
    "0 22 * 0-12 *",
    "failed to parse month field: range [0-12] of [0-12] is outside of allowed values [1-12]"
)]
#[case(
    "99999-3 * * * *",
    "failed to parse minute field: range start value of [99999] is larger than range end value of [3] in [99999-3]"
)]
fn error_messages(#[case] pattern: &str, #[case] expected: &str) {
    assert_eq!(Schedule::new(pattern).unwrap_err().to_string(), expected);
}

#[test]
fn first_invalid_field_is_reported() {
    assert_eq!(
        Schedule::new("60 24 32 13 7"),
        Err(CronError::OutOfDomain {
            field: Field::Minute,
            token: "60".to_owned(),
            start: 60,
            end: 60,
            min: 0,
            max: 59
        })
    );
}

#[test]
fn infeasible_schedule_reports_horizon() {
    let schedule = Schedule::new("0 0 31 2 *").unwrap();
    let error = schedule.next_execution(&local("2020-07-23 15:28:00")).unwrap_err();

    assert_eq!(
        error,
        CronError::NoFeasibleExecution {
            horizon: cron_next::DEFAULT_SEARCH_HORIZON_YEARS
        }
    );
    assert_eq!(error.to_string(), "no execution time found within 400 consecutive years");
}
