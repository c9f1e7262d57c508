//! # mora-epoch
//!
//! EpochClock: the pure time→identifier mapping behind "one question per UTC
//! hour". Stateless and deterministic over a `DateTime<Utc>` snapshot.
//!
//! ## Epoch encoding
//!
//! `epoch_id` is fixed-width `HHDDMMYY`:
//!
//! | Field | Range | Source |
//! |-------|-------|--------|
//! | `HH` | 01..=24 | UTC hour + 1 (game hour slot) |
//! | `DD` | 01..=31 | UTC day of month |
//! | `MM` | 01..=12 | UTC month (game month slot) |
//! | `YY` | 00..=99 | 2-digit UTC year |
//!
//! The encoding wraps at year boundaries and is not sortable; `EpochId` is a
//! grouping key only. Slots 1..=24 exist for epoch ids and display; the
//! `opens_at`/`closes_at` bounds use real UTC components.
//!
//! Callers must take one `now` snapshot per logical operation — mixing
//! snapshots across an hour boundary splits the operation over two epochs.

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use shared_types::EpochId;

/// UTC hour 0–23 → game slot 1–24 (slot 1 = 00:00–00:59 UTC).
pub fn game_hour_slot(now: DateTime<Utc>) -> u32 {
    now.hour() + 1
}

/// UTC month → game slot 1–12.
pub fn game_month_slot(now: DateTime<Utc>) -> u32 {
    now.month()
}

/// Epoch id `HHDDMMYY`, stable for exactly one UTC hour and changing at
/// minute 0 of the next hour.
pub fn epoch_id(now: DateTime<Utc>) -> EpochId {
    EpochId::new(format!(
        "{:02}{:02}{:02}{:02}",
        game_hour_slot(now),
        now.day(),
        game_month_slot(now),
        now.year().rem_euclid(100)
    ))
}

/// Start and end of the UTC hour containing `now`: `(HH:00:00.000,
/// HH:59:59.999)`. Used for a promoted question's `opens_at`/`closes_at`.
pub fn epoch_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let opens_at = truncate_to_hour(now);
    let closes_at = opens_at + Duration::hours(1) - Duration::milliseconds(1);
    (opens_at, closes_at)
}

fn truncate_to_hour(now: DateTime<Utc>) -> DateTime<Utc> {
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        // Zeroing sub-hour fields of a valid UTC timestamp cannot fail.
        .unwrap_or(now)
}
