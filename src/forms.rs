//! Interest and installment computations.
//!
//! Pure functions over parsed numbers, plus the field-level parsing and
//! validation the interactive forms share with the CLI subcommands.
//!
//! Formulas:
//! - simple interest = principal · rate · time / 100
//! - installment = principal · (1 + rate · months) / months, with rate the
//!   annual percentage expressed as a fraction

use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Ways a form submission can be rejected. No partial result is ever
/// produced alongside one of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required")]
    FieldsRequired,
    /// Unparseable or non-finite input.
    #[error("Please enter valid numbers")]
    InvalidNumber,
    #[error("Principal and time must be positive, rate cannot be negative")]
    NonPositiveInputs,
    #[error("Rate must be 13 or 15")]
    UnsupportedRate,
    #[error("Months must be between 2 and 12")]
    MonthsOutOfRange,
}

// ============================================================================
// CONSTANTS
// ============================================================================

/// Annual rates the installment plan is offered at, in percent.
pub const INSTALLMENT_RATES: [u32; 2] = [13, 15];

/// Tenures the installment plan is offered for, in months.
pub const INSTALLMENT_MONTHS: RangeInclusive<u32> = 2..=12;

// ============================================================================
// SIMPLE INTEREST
// ============================================================================

/// One simple-interest computation, inputs echoed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestBreakdown {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
    pub interest: f64,
    pub total: f64,
}

/// Compute simple interest.
///
/// # Errors
/// [`FormError::InvalidNumber`] when any input is not a finite number.
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> Result<InterestBreakdown, FormError> {
    if !(principal.is_finite() && rate.is_finite() && time.is_finite()) {
        return Err(FormError::InvalidNumber);
    }

    let interest = principal * rate * time / 100.0;
    Ok(InterestBreakdown {
        principal,
        rate,
        time,
        interest,
        total: principal + interest,
    })
}

/// Simple interest from raw form fields.
///
/// Requires all three fields, parses them, and enforces the range rule
/// (principal and time positive, rate non-negative) before computing.
pub fn interest_from_fields(
    principal: &str,
    rate: &str,
    time: &str,
) -> Result<InterestBreakdown, FormError> {
    let principal = parse_field(principal)?;
    let rate = parse_field(rate)?;
    let time = parse_field(time)?;

    if principal <= 0.0 || time <= 0.0 || rate < 0.0 {
        return Err(FormError::NonPositiveInputs);
    }

    simple_interest(principal, rate, time)
}

// ============================================================================
// INSTALLMENT PLAN
// ============================================================================

/// One installment-plan computation, inputs echoed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstallmentBreakdown {
    pub principal: f64,
    /// Annual rate in percent.
    pub rate: u32,
    /// Tenure in months.
    pub months: u32,
    pub installment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Compute a fixed-rate installment plan.
///
/// # Errors
/// Rejects non-finite or non-positive principal, rates outside
/// [`INSTALLMENT_RATES`], and tenures outside [`INSTALLMENT_MONTHS`].
pub fn installment(principal: f64, rate: u32, months: u32) -> Result<InstallmentBreakdown, FormError> {
    if !principal.is_finite() {
        return Err(FormError::InvalidNumber);
    }
    if principal <= 0.0 {
        return Err(FormError::NonPositiveInputs);
    }
    if !INSTALLMENT_RATES.contains(&rate) {
        return Err(FormError::UnsupportedRate);
    }
    if !INSTALLMENT_MONTHS.contains(&months) {
        return Err(FormError::MonthsOutOfRange);
    }

    let rate_fraction = f64::from(rate) / 100.0;
    let tenure = f64::from(months);
    let installment = principal * (1.0 + rate_fraction * tenure) / tenure;
    let total_payment = installment * tenure;

    Ok(InstallmentBreakdown {
        principal,
        rate,
        months,
        installment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Installment plan from raw form fields.
pub fn installment_from_fields(
    principal: &str,
    rate: &str,
    months: &str,
) -> Result<InstallmentBreakdown, FormError> {
    let principal = parse_field(principal)?;
    let rate = parse_int_field(rate)?;
    let months = parse_int_field(months)?;
    installment(principal, rate, months)
}

// ============================================================================
// FIELD PARSING
// ============================================================================

/// Parse a required decimal field.
fn parse_field(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::FieldsRequired);
    }
    let value: f64 = trimmed.parse().map_err(|_| FormError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(FormError::InvalidNumber);
    }
    Ok(value)
}

/// Parse a required whole-number field. Fractional input is rejected the
/// same way unparseable input is.
fn parse_int_field(raw: &str) -> Result<u32, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::FieldsRequired);
    }
    trimmed.parse().map_err(|_| FormError::InvalidNumber)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- Simple interest --

    #[test]
    fn interest_1000_at_5_for_2_years() {
        let b = simple_interest(1000.0, 5.0, 2.0).unwrap();
        assert!(approx(b.interest, 100.0));
        assert!(approx(b.total, 1100.0));
        assert!(approx(b.principal, 1000.0));
    }

    #[test]
    fn interest_rejects_non_finite_inputs() {
        assert_eq!(simple_interest(f64::NAN, 5.0, 2.0), Err(FormError::InvalidNumber));
        assert_eq!(
            simple_interest(1000.0, f64::INFINITY, 2.0),
            Err(FormError::InvalidNumber)
        );
        assert_eq!(
            simple_interest(1000.0, 5.0, f64::NEG_INFINITY),
            Err(FormError::InvalidNumber)
        );
    }

    #[test]
    fn interest_zero_rate_earns_nothing() {
        let b = simple_interest(1000.0, 0.0, 2.0).unwrap();
        assert!(approx(b.interest, 0.0));
        assert!(approx(b.total, 1000.0));
    }

    #[test]
    fn interest_fields_parse_with_whitespace() {
        let b = interest_from_fields(" 1000 ", "5", " 2").unwrap();
        assert!(approx(b.interest, 100.0));
        assert!(approx(b.total, 1100.0));
    }

    #[test]
    fn interest_fields_all_required() {
        assert_eq!(
            interest_from_fields("", "5", "2"),
            Err(FormError::FieldsRequired)
        );
        assert_eq!(
            interest_from_fields("1000", "   ", "2"),
            Err(FormError::FieldsRequired)
        );
    }

    #[test]
    fn interest_fields_reject_garbage() {
        assert_eq!(
            interest_from_fields("abc", "5", "2"),
            Err(FormError::InvalidNumber)
        );
        assert_eq!(
            interest_from_fields("1000", "5", "two"),
            Err(FormError::InvalidNumber)
        );
    }

    #[test]
    fn interest_fields_reject_textual_infinity() {
        // "inf" parses as f64 but is not a finite amount of money.
        assert_eq!(
            interest_from_fields("inf", "5", "2"),
            Err(FormError::InvalidNumber)
        );
    }

    #[test]
    fn interest_fields_range_rules() {
        assert_eq!(
            interest_from_fields("-1000", "5", "2"),
            Err(FormError::NonPositiveInputs)
        );
        assert_eq!(
            interest_from_fields("1000", "5", "0"),
            Err(FormError::NonPositiveInputs)
        );
        assert_eq!(
            interest_from_fields("1000", "-5", "2"),
            Err(FormError::NonPositiveInputs)
        );
        // Zero rate is allowed; zero principal is not.
        assert!(interest_from_fields("1000", "0", "2").is_ok());
        assert_eq!(
            interest_from_fields("0", "5", "2"),
            Err(FormError::NonPositiveInputs)
        );
    }

    // -- Installment plan --

    #[test]
    fn installment_10000_at_13_over_6_months() {
        let b = installment(10000.0, 13, 6).unwrap();
        // 10000 * (1 + 0.13 * 6) / 6
        assert!(approx(b.installment, 10000.0 * 1.78 / 6.0));
        assert!(approx(b.total_payment, b.installment * 6.0));
        assert!(approx(b.total_interest, b.total_payment - 10000.0));
    }

    #[test]
    fn installment_supports_both_rates() {
        assert!(installment(5000.0, 13, 12).is_ok());
        assert!(installment(5000.0, 15, 2).is_ok());
    }

    #[test]
    fn installment_rejects_other_rates() {
        assert_eq!(installment(5000.0, 10, 6), Err(FormError::UnsupportedRate));
        assert_eq!(installment(5000.0, 14, 6), Err(FormError::UnsupportedRate));
    }

    #[test]
    fn installment_rejects_tenure_outside_range() {
        assert_eq!(installment(5000.0, 13, 1), Err(FormError::MonthsOutOfRange));
        assert_eq!(installment(5000.0, 13, 13), Err(FormError::MonthsOutOfRange));
        assert!(installment(5000.0, 13, 2).is_ok());
        assert!(installment(5000.0, 13, 12).is_ok());
    }

    #[test]
    fn installment_rejects_non_positive_principal() {
        assert_eq!(installment(0.0, 13, 6), Err(FormError::NonPositiveInputs));
        assert_eq!(installment(-1.0, 13, 6), Err(FormError::NonPositiveInputs));
    }

    #[test]
    fn installment_fields_happy_path() {
        let b = installment_from_fields("10000", "13", "6").unwrap();
        assert_eq!(b.rate, 13);
        assert_eq!(b.months, 6);
    }

    #[test]
    fn installment_fields_reject_fractional_months() {
        assert_eq!(
            installment_from_fields("10000", "13", "6.5"),
            Err(FormError::InvalidNumber)
        );
    }

    #[test]
    fn installment_fields_all_required() {
        assert_eq!(
            installment_from_fields("10000", "", "6"),
            Err(FormError::FieldsRequired)
        );
    }

    // -- Error messages --

    #[test]
    fn error_messages_match_the_forms() {
        assert_eq!(FormError::FieldsRequired.to_string(), "All fields are required");
        assert_eq!(FormError::InvalidNumber.to_string(), "Please enter valid numbers");
        assert_eq!(FormError::UnsupportedRate.to_string(), "Rate must be 13 or 15");
        assert_eq!(
            FormError::MonthsOutOfRange.to_string(),
            "Months must be between 2 and 12"
        );
    }
}
