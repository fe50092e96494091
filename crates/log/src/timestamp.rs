use std::fmt;
use std::time::Duration;

const SECS_PER_DAY: u64 = 86_400;

/// UTC wall-clock time rendered as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamp {
    pub unix_seconds: u64,
    pub millis: u32,
}

impl Timestamp {
    pub fn from_duration(since_epoch: Duration) -> Self {
        Self {
            unix_seconds: since_epoch.as_secs(),
            millis: since_epoch.subsec_millis(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = (self.unix_seconds / SECS_PER_DAY) as i64;
        let secs_of_day = self.unix_seconds % SECS_PER_DAY;
        let (year, month, day) = civil_from_days(days);
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
            secs_of_day / 3600,
            (secs_of_day % 3600) / 60,
            secs_of_day % 60,
            self.millis
        )
    }
}

pub(crate) fn millis(since_epoch: Duration) -> u64 {
    since_epoch.as_millis().try_into().unwrap_or(u64::MAX)
}

// Howard Hinnant's days-to-civil conversion.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe as i32 + era as i32 * 400 + i32::from(month <= 2);
    (year, month, day)
}
