//! Match clock formatting.
//!
//! Every timestamp in the model is a [`Duration`] measured from the start of
//! the match. Transcripts render them in the constant clock layout used by the
//! game's own replay tools:
//!
//! | Elapsed | Rendering |
//! |---------|-----------|
//! | 12 min 30 s | `00:12:30` |
//! | 1 h | `01:00:00` |
//! | 1 day 2 h | `1.02:00:00` |
//! | 5.0625 s | `00:00:05.0625000` |
//!
//! The sub-second part is printed in 100ns ticks (seven digits) and only when
//! it is non-zero. Replay game loops run at 16 per second, so fractional
//! timestamps are common in decoded data.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use heroes_replay::format::format_timestamp;
//!
//! assert_eq!(format_timestamp(Duration::from_secs(750)), "00:12:30");
//! ```

use std::time::Duration;

/// Seconds in one day.
const SECONDS_PER_DAY: u64 = 86_400;

/// Nanoseconds per 100ns tick.
const NANOS_PER_TICK: u32 = 100;

/// Splits a duration into `(days, hours, minutes, seconds, ticks)`.
#[must_use]
pub fn timestamp_parts(timestamp: Duration) -> (u64, u64, u64, u64, u32) {
    let total = timestamp.as_secs();
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let ticks = timestamp.subsec_nanos() / NANOS_PER_TICK;
    (days, hours, minutes, seconds, ticks)
}

/// Formats a match timestamp as `HH:MM:SS`.
///
/// Durations of a day or longer gain a `D.` prefix, and a non-zero sub-second
/// part is appended as `.fffffff` (100ns ticks).
#[must_use]
pub fn format_timestamp(timestamp: Duration) -> String {
    let (days, hours, minutes, seconds, ticks) = timestamp_parts(timestamp);

    let mut out = if days > 0 {
        format!("{days}.{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    };

    if ticks > 0 {
        out.push_str(&format!(".{ticks:07}"));
    }

    out
}
