use chrono::Utc;
use cron_next::{Result, Schedule};

#[test]
fn iterator() -> Result<()> {
    let schedule = Schedule::new("0 0 * * *")?;
    let now = Utc::now();

    // Get the next 10 timestamps starting from now
    let events = schedule.iter(&now).take(10).collect::<Vec<_>>();
    events.iter().for_each(|t| println!("next: {t}"));

    assert_eq!(events.len(), 10);
    assert!(events.windows(2).all(|pair| pair[1] - pair[0] == chrono::TimeDelta::days(1)));

    Ok(())
}
