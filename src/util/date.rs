//! Display formatting for timestamps in Korea Standard Time.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, FixedOffset, Utc};

const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Format `value` the way a `ko-KR` locale renders a 24-hour date-time in
/// KST, e.g. `2024. 3. 5. 14:07:09`.
#[must_use]
pub fn format_kst_date_time(value: DateTime<Utc>) -> String {
    let Some(kst) = FixedOffset::east_opt(KST_OFFSET_SECS) else {
        return value.to_rfc3339();
    };
    value.with_timezone(&kst).format("%Y. %-m. %-d. %H:%M:%S").to_string()
}
