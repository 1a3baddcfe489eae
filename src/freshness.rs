//! Expiry classification for inventory display.
//!
//! Not part of the menu pipeline, but shares its purity discipline: the
//! classification is a function of the expiry date and a supplied "now".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InventoryItem;

/// How soon an item needs to be used, relative to a supplied "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    Fresh,
    NeedSoon,
    Expired,
}

impl FreshnessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "fresh",
            FreshnessStatus::NeedSoon => "need_soon",
            FreshnessStatus::Expired => "expired",
        }
    }
}

/// Days before expiry at which an item is flagged as needing use soon.
const NEED_SOON_WINDOW_DAYS: i64 = 7;

/// Classify an expiry date against `now`.
///
/// No expiry date means the item never goes stale. An item expiring within
/// the next 7 days (inclusive) needs to be used soon; a past date means
/// expired.
pub fn classify(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> FreshnessStatus {
    let Some(expires) = expires_at else {
        return FreshnessStatus::Fresh;
    };

    let remaining = expires - now;
    if remaining < Duration::zero() {
        FreshnessStatus::Expired
    } else if remaining <= Duration::days(NEED_SOON_WINDOW_DAYS) {
        FreshnessStatus::NeedSoon
    } else {
        FreshnessStatus::Fresh
    }
}

impl InventoryItem {
    /// Freshness of this item relative to `now`.
    pub fn freshness(&self, now: DateTime<Utc>) -> FreshnessStatus {
        classify(self.expires_at, now)
    }
}
