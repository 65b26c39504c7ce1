use rust_decimal::Decimal;
use serde::Deserialize;
use time::{macros::format_description, Date};
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).clamp(1, 100) as u64
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0).max(0) as u64
    }
}

/// Trimmed value, rejecting missing or blank input
pub fn validate_required(field: &str, value: Option<String>) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Trimmed value, blank input counts as absent
pub fn validate_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Passwords are taken verbatim, only emptiness is rejected
pub fn validate_password(value: Option<String>) -> AppResult<String> {
    value
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("password is required".to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(field: &str, raw: &str) -> AppResult<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", field)))
}

pub fn parse_optional_date(field: &str, raw: Option<String>) -> AppResult<Option<Date>> {
    validate_optional(raw)
        .map(|raw| parse_date(field, &raw))
        .transpose()
}

pub fn format_date(date: Option<Date>) -> Option<String> {
    date.and_then(|d| d.format(format_description!("[year]-[month]-[day]")).ok())
}

/// Integer digits of a `NUMERIC(14, 2)` budget column
pub const BUDGET_INTEGER_DIGITS: u32 = 12;
/// Integer digits of a `NUMERIC(10, 2)` rate column
pub const RATE_INTEGER_DIGITS: u32 = 8;

/// Parse an amount that must fit a money column
pub fn parse_amount(field: &str, raw: &str, integer_digits: u32) -> AppResult<Decimal> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number", field)))?;
    ensure_money(field, amount, integer_digits)
}

/// Non-negative, at most two decimal places and `integer_digits` digits
/// before the point
pub fn ensure_money(field: &str, amount: Decimal, integer_digits: u32) -> AppResult<Decimal> {
    if amount.is_sign_negative() {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    if amount.normalize().scale() > 2 {
        return Err(AppError::Validation(format!(
            "{} must have at most 2 decimal places",
            field
        )));
    }
    if amount >= Decimal::from(10u64.pow(integer_digits)) {
        return Err(AppError::Validation(format!(
            "{} must have at most {} digits before the decimal point",
            field, integer_digits
        )));
    }
    Ok(amount)
}
