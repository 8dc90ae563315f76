//! [`Date`] - shared handle to a mutable epoch-millisecond time value.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// Largest absolute time value a date can hold, in milliseconds.
const MAX_TIME: f64 = 8.64e15;

/// A reference-counted date. An invalid date holds `NaN`.
#[derive(Clone)]
pub struct Date(Rc<Cell<f64>>);

impl Date {
    /// Creates a date from epoch milliseconds. Non-finite or out of range
    /// inputs produce an invalid date; fractions are truncated.
    pub fn new(time: f64) -> Self {
        Self(Rc::new(Cell::new(time_clip(time))))
    }

    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.timestamp_millis() as f64)
    }

    pub fn invalid() -> Self {
        Self::new(f64::NAN)
    }

    /// Epoch milliseconds, `NaN` for an invalid date.
    pub fn time(&self) -> f64 {
        self.0.get()
    }

    pub fn set_time(&self, time: f64) {
        self.0.set(time_clip(time));
    }

    pub fn is_valid(&self) -> bool {
        !self.time().is_nan()
    }

    /// `None` for an invalid date, and for valid dates past the range
    /// `chrono` represents (roughly year ±262143).
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time() as i64)
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ` for years 0 through 9999, the extended
    /// `±YYYYYY-MM-DDTHH:mm:ss.sssZ` form otherwise, or `None` for an
    /// invalid date.
    pub fn to_iso_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        match self.to_datetime() {
            Some(dt) if (0..=9999).contains(&dt.year()) => {
                Some(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            _ => Some(extended_iso(self.time() as i64)),
        }
    }

    pub fn ptr_eq(&self, other: &Date) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME {
        return f64::NAN;
    }
    // + 0.0 folds -0 into +0
    time.trunc() + 0.0
}

const MS_PER_DAY: i64 = 86_400_000;

/// Formats epoch milliseconds with a signed six-digit year.
fn extended_iso(time: i64) -> String {
    let (year, month, day) = civil_from_days(time.div_euclid(MS_PER_DAY));
    let ms = time.rem_euclid(MS_PER_DAY);
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{sign}{:06}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
        year.unsigned_abs(),
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000,
    )
}

/// Proleptic Gregorian `(year, month, day)` of a day count since the epoch.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

impl From<DateTime<Utc>> for Date {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso_string() {
            Some(iso) => f.write_str(&iso),
            None => f.write_str("Invalid Date"),
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}
