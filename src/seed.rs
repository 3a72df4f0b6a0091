//! Seeds
//!
//! A seed is a human-visible decimal string, shared to replay a board. It is
//! reduced to a signed 32-bit value for the generator. Daily seeds are the
//! UTC calendar date as `YYYYMMDD`, so everyone gets the same board on the
//! same UTC day.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::RANDOM_SEED_RANGE;

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_31: f64 = 2_147_483_648.0;
const SECS_PER_DAY: i64 = 86_400;

/// Reduce a seed string to the generator's 32-bit seed.
///
/// Reads an optional sign and the leading run of decimal digits (after any
/// leading whitespace) and wraps the value to a signed 32-bit integer.
/// Trailing garbage is ignored; strings with no leading digits map to 0.
pub fn parse_seed(seed: &str) -> i32 {
    let s = seed.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    let Ok(magnitude) = rest[..digits_len].parse::<f64>() else {
        return 0;
    };
    let value = if negative { -magnitude } else { magnitude };
    wrap_i32(value)
}

/// Wrap an integral float to i32 modulo 2^32
fn wrap_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_31 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

/// A proleptic Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Date for a count of days since 1970-01-01
    pub fn from_unix_days(days: i64) -> Self {
        // Eras of 400 years, March-based years so leap days fall last
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    /// Today's date in UTC
    pub fn today_utc() -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        Self::from_unix_days(secs.div_euclid(SECS_PER_DAY))
    }
}

/// Daily seed for a date: its `YYYYMMDD` digits
pub fn daily_seed_for(date: CivilDate) -> String {
    format!("{:04}{:02}{:02}", date.year, date.month, date.day)
}

/// Daily seed for the current UTC date
pub fn daily_seed() -> String {
    daily_seed_for(CivilDate::today_utc())
}

/// Random seed in `[0, RANDOM_SEED_RANGE)`
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(0..RANDOM_SEED_RANGE).to_string()
}

/// Random seed from the thread-local generator
pub fn random_seed_from_entropy() -> String {
    random_seed(&mut rand::rng())
}

/// Where a session's seed comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedSource {
    Daily,
    Random,
    Fixed(String),
}

impl SeedSource {
    pub fn resolve(&self) -> String {
        match self {
            SeedSource::Daily => daily_seed(),
            SeedSource::Random => random_seed_from_entropy(),
            SeedSource::Fixed(seed) => seed.clone(),
        }
    }
}
