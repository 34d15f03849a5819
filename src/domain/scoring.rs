use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use crate::models::{Item, Receipt};

/// Reward points awarded to a receipt
pub type Points = u64;

const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;
const ROUND_TOTAL_POINTS: Points = 50;
const QUARTER_TOTAL_POINTS: Points = 25;
const ITEM_PAIR_POINTS: Points = 5;

// Seconds from midnight
const AFTERNOON_START: u32 = 14 * 3600;
const AFTERNOON_END: u32 = 16 * 3600;

const QUARTER: Decimal = dec!(0.25);
const DESCRIPTION_PRICE_RATE: Decimal = dec!(0.2);

static LETTER_OR_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]").expect("letter/number pattern is valid"));

/// Per-rule contributions to a receipt's points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub odd_day: Points,
    pub afternoon: Points,
    pub round_total: Points,
    pub quarter_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
}

impl PointsBreakdown {
    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.odd_day,
            self.afternoon,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Score a validated receipt. Pure: the receipt is not modified and the
/// same receipt always yields the same points.
pub fn score(receipt: &Receipt) -> Points {
    let breakdown = score_breakdown(receipt);
    debug!(?breakdown, "Receipt scored");
    breakdown.total()
}

/// Evaluate every rule independently
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        odd_day: odd_day_points(receipt.purchase_date),
        afternoon: afternoon_points(receipt.purchase_time),
        round_total: round_total_points(receipt.total),
        quarter_total: quarter_total_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, Points::saturating_add),
    }
}

/// One point for every character in the Unicode letter or number categories.
/// Combining marks are not letters even when they are alphabetic.
pub fn retailer_name_points(retailer: &str) -> Points {
    LETTER_OR_NUMBER.find_iter(retailer).count() as Points
}

pub fn odd_day_points(date: NaiveDate) -> Points {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Purchases strictly between 14:00 and 16:00. Both boundaries are excluded.
pub fn afternoon_points(time: NaiveTime) -> Points {
    let seconds = time.num_seconds_from_midnight();
    if seconds > AFTERNOON_START && seconds < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

pub fn round_total_points(total: Decimal) -> Points {
    if total.fract().is_zero() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

pub fn quarter_total_points(total: Decimal) -> Points {
    if (total % QUARTER).is_zero() {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// Five points for every two items, regardless of their content
pub fn item_pair_points(item_count: usize) -> Points {
    ITEM_PAIR_POINTS * (item_count / 2) as Points
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// Only spaces are trimmed and the length is measured in bytes. An
/// all-space (or empty) description has length 0 and still qualifies.
pub fn item_description_points(item: &Item) -> Points {
    let trimmed = item.short_description.trim_matches(' ');
    if trimmed.len() % 3 != 0 {
        return 0;
    }

    (item.price * DESCRIPTION_PRICE_RATE)
        .ceil()
        .to_u64()
        .unwrap_or(Points::MAX)
}
