//! Injected time capability.
//!
//! The only time-dependent value in the generated site is the copyright
//! year in the footer. Renderers take a [`Clock`] instead of reading the
//! system time directly, so tests can pin the year and output stays
//! deterministic. A build that straddles a year boundary may observe two
//! different years across render calls; accepted, not guarded against.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Wall-clock implementation used by the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_matches_chrono() {
        let clock = SystemClock;
        assert_eq!(clock.current_year(), chrono::Local::now().year());
    }
}
