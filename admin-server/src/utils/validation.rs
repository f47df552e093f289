//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by all
//! catalog mutations. Limits are chosen based on what the dashboard forms
//! allow plus some headroom.

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, store, collection, flyer, user, notification title
pub const MAX_NAME_LEN: usize = 200;

/// Notification bodies, store descriptions
pub const MAX_NOTE_LEN: usize = 1000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image file names
pub const MAX_URL_LEN: usize = 2048;

/// Maximum allowed flyer price (€1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid email address: {email}"),
        )),
    }
}

// ── Flyer pricing and validity ──────────────────────────────────────

/// Price must be a finite number in `(0, MAX_PRICE]`.
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::new(ErrorCode::FlyerInvalidPrice).with_detail("price", price));
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::FlyerInvalidPrice,
            format!("Price exceeds maximum allowed ({MAX_PRICE}), got {price}"),
        )
        .with_detail("price", price));
    }
    Ok(())
}

/// Discount percentage must lie in `[0, 100]`.
pub fn validate_discount(discount: f64) -> Result<(), AppError> {
    if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
        return Err(
            AppError::new(ErrorCode::FlyerInvalidDiscount).with_detail("discountPercentage", discount)
        );
    }
    Ok(())
}

/// End of a validity window must be strictly after its start.
pub fn validate_window(start: i64, end: i64) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::new(ErrorCode::FlyerInvalidWindow)
            .with_detail("startDate", start)
            .with_detail("endDate", end));
    }
    Ok(())
}
