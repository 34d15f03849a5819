use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{Item, RawItem, RawReceipt, Receipt};
use super::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// `d` is any ASCII digit, anything else must match exactly
const DATE_LAYOUT: &str = "dddd-dd-dd";
const TIME_LAYOUT: &str = "dd:dd";

/// Parse every field of a raw receipt, stopping at the first violation.
///
/// Fields are checked in order: retailer, purchase date, purchase time,
/// total, then items (count first, then each price in list order).
pub fn validate(raw: &RawReceipt) -> Result<Receipt, ValidationError> {
    let retailer = require_non_empty("retailer", &raw.retailer)?;
    let purchase_date = parse_date(&raw.purchase_date)?;
    let purchase_time = parse_time(&raw.purchase_time)?;
    let total = parse_amount("total", &raw.total)?;

    if raw.items.is_empty() {
        return Err(ValidationError::TooFewItems);
    }

    let items = raw
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn parse_item(index: usize, raw: &RawItem) -> Result<Item, ValidationError> {
    let price = parse_amount(&format!("items[{}].price", index), &raw.price)?;

    Ok(Item {
        short_description: raw.short_description.clone(),
        price,
    })
}

fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: field.to_string() });
    }
    Ok(value)
}

/// Parse a `YYYY-MM-DD` purchase date. The date must exist on the calendar.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = require_non_empty("purchaseDate", value)?;

    // chrono tolerates padding and signs inside numeric fields
    if !matches_layout(value, DATE_LAYOUT) {
        return Err(invalid_format("purchaseDate", value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| invalid_format("purchaseDate", value))
}

/// Parse a 24-hour `HH:MM` purchase time
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = require_non_empty("purchaseTime", value)?;

    if !matches_layout(value, TIME_LAYOUT) {
        return Err(invalid_format("purchaseTime", value));
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| invalid_format("purchaseTime", value))
}

fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value.bytes().zip(layout.bytes()).all(|(b, l)| match l {
            b'd' => b.is_ascii_digit(),
            _ => b == l,
        })
}

/// Parse a currency amount: digits, optionally followed by `.` and one or
/// two fractional digits. Parsed exactly, never through a float.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal, ValidationError> {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.map_or(true, |f| {
        (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit())
    });

    if !whole_ok || !fraction_ok {
        return Err(invalid_number(field, value));
    }

    Decimal::from_str_exact(value).map_err(|_| invalid_number(field, value))
}

fn invalid_format(field: &str, value: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn invalid_number(field: &str, value: &str) -> ValidationError {
    ValidationError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    }
}
