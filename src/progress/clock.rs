//! Calendar source for activity history

use std::sync::{Arc, Mutex};

use chrono::{Days, Local, NaiveDate};

/// Supplies "today" at day granularity
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for simulations and tests.
///
/// Clones share the same date, so a test can keep one handle and advance the
/// clock held by a store.
#[derive(Debug, Clone)]
pub struct FixedClock {
    day: Arc<Mutex<NaiveDate>>,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day: Arc::new(Mutex::new(day)),
        }
    }

    pub fn set(&self, day: NaiveDate) {
        if let Ok(mut current) = self.day.lock() {
            *current = day;
        }
    }

    pub fn advance(&self, days: u64) {
        if let Ok(mut current) = self.day.lock() {
            if let Some(next) = current.checked_add_days(Days::new(days)) {
                *current = next;
            }
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.day.lock() {
            Ok(day) => *day,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
