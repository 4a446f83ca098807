//! Result-card formatting.
//!
//! Pure functions — (breakdown, OutputFormat) → String. The labeled rows
//! are shared with the TUI result cards; currency and percentage values
//! are always shown to two decimal places.

use crate::forms::{InstallmentBreakdown, InterestBreakdown};

/// Output format for CLI result cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable labeled card.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// CARD ROWS
// ============================================================================

/// Labeled rows of a simple-interest result card.
pub fn interest_card(b: &InterestBreakdown) -> Vec<(&'static str, String)> {
    vec![
        ("Principal Amount:", format!("${:.2}", b.principal)),
        ("Interest Rate:", format!("{:.2}%", b.rate)),
        ("Time Period:", format!("{:.2} years", b.time)),
        ("Simple Interest:", format!("${:.2}", b.interest)),
        ("Total Amount:", format!("${:.2}", b.total)),
    ]
}

/// Labeled rows of an installment result card.
pub fn installment_card(b: &InstallmentBreakdown) -> Vec<(&'static str, String)> {
    vec![
        ("Principal Amount:", format!("${:.2}", b.principal)),
        ("Annual Rate:", format!("{:.2}%", f64::from(b.rate))),
        ("Tenure:", format!("{} months", b.months)),
        ("Monthly EMI:", format!("${:.2}", b.installment)),
        ("Total Payment:", format!("${:.2}", b.total_payment)),
        ("Total Interest:", format!("${:.2}", b.total_interest)),
    ]
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a simple-interest result for output.
pub fn format_interest(b: &InterestBreakdown, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_card("Simple Interest", &interest_card(b)),
        OutputFormat::Json => format_json(b),
    }
}

/// Format an installment result for output.
pub fn format_installment(b: &InstallmentBreakdown, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_card("Installment Plan", &installment_card(b)),
        OutputFormat::Json => format_json(b),
    }
}

fn format_card(title: &str, rows: &[(&'static str, String)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", title));
    for (label, value) in rows {
        out.push_str(&format!("{:<18} {}\n", label, value));
    }
    out
}

fn format_json<T: serde::Serialize>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize result to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
