mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use lukashian_calendar::{Clock, SystemClock};
use tracing::debug;

fn main() {
    logging::init();

    if let Err(e) = run(&SystemClock, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(clock: &dyn Clock, out: &mut impl Write) -> Result<()> {
    let now = clock.now().context("failed to read the current moment")?;
    debug!(epoch_ms = now.epoch_milliseconds(), "read current moment");

    let decomposition = now.decompose();
    writeln!(out, "Year: {}", decomposition.year().number())?;
    writeln!(out, "Day: {}", decomposition.day().number())?;
    writeln!(out, "Beeps: {}", decomposition.beeps())?;
    writeln!(out, "Formatted: {now}")?;
    writeln!(out, "Unix: {}", now.unix_epoch_milliseconds())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lukashian_calendar::{CalendarError, FixedClock, Instant};

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> Result<Instant, CalendarError> {
            Err(CalendarError::ClockUnavailable {
                reason: "no time source".to_string(),
            })
        }
    }

    #[test]
    fn prints_five_lines() {
        // 2026-01-01T00:00:00Z
        let instant = Instant::from_unix_epoch_milliseconds(1_767_225_600_000).unwrap();
        let mut out = Vec::new();
        run(&FixedClock::new(instant), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Year: 5929\n\
             Day: 354\n\
             Beeps: 9219\n\
             Formatted: 9219 354-5929\n\
             Unix: 1767225600000\n"
        );
    }

    #[test]
    fn prints_epoch() {
        let mut out = Vec::new();
        run(&FixedClock::new(Instant::from_epoch_milliseconds(0).unwrap()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Year: 1",
                "Day: 1",
                "Beeps: 0",
                "Formatted: 0000 001-1",
                "Unix: -185208761225352",
            ]
        );
    }

    #[test]
    fn clock_failure_writes_nothing() {
        let mut out = Vec::new();
        let err = run(&BrokenClock, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(
            format!("{err:#}"),
            "failed to read the current moment: clock unavailable: no time source"
        );
    }
}
