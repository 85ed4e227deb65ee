//! # fuel-calc
//!
//! Turns free-form text like `500 40 220` (distance km, fuel l, optional price per litre)
//! into a reply such as `Consumption: 8.00 l/100km\nCost: 8800.00`.
//!
//! [`calc_text`] is the entry point used by the bot; it never fails, every [`CalcError`]
//! is rendered as its user-facing message. [`parse_request`] exposes the typed request.

use std::fmt;
use thiserror::Error;

/// Input problems. `Display` is the exact text sent back to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("need at least two numbers: distance(km) and fuel(l), example: 500 40 220")]
    TooFewNumbers,

    #[error("could not parse numbers, example: 500 40 220")]
    InvalidNumber,

    #[error("distance and fuel must be > 0")]
    NonPositive,

    /// Inputs are finite but the consumption or cost overflows.
    #[error("numbers are out of range, example: 500 40 220")]
    OutOfRange,
}

/// One calculation request: distance, fuel and an optional price per litre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRequest {
    pub distance_km: f64,
    pub fuel_l: f64,
    /// Price as typed by the user; may be ≤ 0, in which case no cost is reported.
    pub price_per_l: Option<f64>,
}

impl FuelRequest {
    /// Litres per 100 km.
    pub fn consumption(&self) -> f64 {
        self.fuel_l / self.distance_km * 100.0
    }

    /// Total cost, only for a positive price.
    pub fn cost(&self) -> Option<f64> {
        self.price_per_l
            .filter(|price| *price > 0.0)
            .map(|price| self.fuel_l * price)
    }
}

impl fmt::Display for FuelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Consumption: {:.2} l/100km", self.consumption())?;
        if let Some(cost) = self.cost() {
            write!(f, "\nCost: {:.2}", cost)?;
        }
        Ok(())
    }
}

/// Removes `_` digit separators (`1_000`). An underscore not between two digits is invalid.
fn strip_digit_separators(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j].is_ascii_digit());
            let after = bytes.get(i + 1).map(u8::is_ascii_digit);
            if before != Some(true) || after != Some(true) {
                return None;
            }
        }
    }
    Some(token.replace('_', ""))
}

/// Parses one number (`,` already normalized to `.`). Every number must be finite:
/// `inf`, `nan` and overflowing literals like `1e400` are rejected.
fn parse_number(token: &str) -> Result<f64, CalcError> {
    strip_digit_separators(token)
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or(CalcError::InvalidNumber)
}

/// Parses `distance fuel [price]`. Tokens after the third are ignored.
///
/// All present tokens are parsed before the range check, so `0 40 abc` is an
/// [`CalcError::InvalidNumber`], not [`CalcError::NonPositive`].
pub fn parse_request(text: &str) -> Result<FuelRequest, CalcError> {
    let normalized = text.replace(',', ".");
    let parts: Vec<&str> = normalized.split_whitespace().collect();

    let (distance, fuel, price) = match parts.as_slice() {
        [distance, fuel] => (*distance, *fuel, None),
        [distance, fuel, price, ..] => (*distance, *fuel, Some(*price)),
        _ => return Err(CalcError::TooFewNumbers),
    };

    let distance_km = parse_number(distance)?;
    let fuel_l = parse_number(fuel)?;
    let price_per_l = price.map(parse_number).transpose()?;

    if distance_km <= 0.0 || fuel_l <= 0.0 {
        return Err(CalcError::NonPositive);
    }

    let request = FuelRequest {
        distance_km,
        fuel_l,
        price_per_l,
    };
    // Results obey the same finiteness rule as inputs (`1e-310 1` overflows).
    if !request.consumption().is_finite() || request.cost().is_some_and(|c| !c.is_finite()) {
        return Err(CalcError::OutOfRange);
    }
    Ok(request)
}

/// Computes the reply text for a user message. Pure: same input, same output.
pub fn calc_text(text: &str) -> String {
    match parse_request(text) {
        Ok(request) => request.to_string(),
        Err(e) => e.to_string(),
    }
}
