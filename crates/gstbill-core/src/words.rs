//! # Amount-in-Words Module
//!
//! Converts a rupee amount into its legal-text representation using the
//! Indian numbering system (Crore / Lakh / Thousand / Hundred).
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1234567.89                                                             │
//! │                                                                         │
//! │  rupees = 1234567          paise = round(0.89 * 100) = 89              │
//! │                                                                         │
//! │  1234567 = 12 Lakh + 34 Thousand + 5 Hundred + 67                      │
//! │            │          │             │           │                       │
//! │            ▼          ▼             ▼           ▼                       │
//! │  "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"           │
//! │                                                                         │
//! │  → "Rupees Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven   │
//! │     and Eighty Nine Paise Only"                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tier's leading figure is rendered by re-applying the same
//! conversion, so 2500000 reads "Twenty Five Lakh", not "Two Five Lakh".
//!
//! The renderer is invoked twice on the printed page: once for the grand
//! total ("Amount Chargeable in words") and once for the combined
//! CGST+SGST amount ("Tax Amount in words").

/// Direct lookup for 1..=19; index 0 is unused.
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// Tens-prefix words for 20..=90; indexes 0 and 1 are unused.
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Magnitude tiers of the Indian numbering system, largest first.
const TIERS: [(u64, &str); 4] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

/// Renders a rupee amount as statutory invoice text.
///
/// ## Contract
/// - `0` → `"Rupees Zero Only"`
/// - Splits into integer rupees and `paise = round(fraction * 100)`;
///   a rounded result of 100 paise carries into the rupee part
///   (so `1.999` reads "Rupees Two Only")
/// - Output is `"Rupees <rupees> Only"`, with `" and <paise> Paise"`
///   inserted before `" Only"` when paise > 0
///
/// ## Edge-case policy
/// Negative and non-finite amounts clamp to zero. The renderer only ever
/// receives computed, non-negative totals; clamping keeps the function
/// total instead of inventing an error surface the printed page could not
/// display.
///
/// ## Example
/// ```rust
/// use gstbill_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(0.0), "Rupees Zero Only");
/// assert_eq!(amount_in_words(100000.0), "Rupees One Lakh Only");
/// ```
pub fn amount_in_words(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };

    let mut rupees = amount.trunc() as u64;
    let mut paise = ((amount - amount.trunc()) * 100.0).round() as u64;

    // Carry: .995 and above rounds to a full rupee.
    if paise >= 100 {
        rupees += paise / 100;
        paise %= 100;
    }

    if rupees == 0 && paise == 0 {
        return "Rupees Zero Only".to_string();
    }

    let rupee_words = if rupees == 0 {
        "Zero".to_string()
    } else {
        int_to_words(rupees)
    };

    let mut result = format!("Rupees {}", rupee_words);
    if paise > 0 {
        result.push_str(&format!(" and {} Paise", int_to_words(paise)));
    }
    result.push_str(" Only");
    result
}

/// Converts a positive integer to words via recursive tier grouping.
///
/// Returns the empty string for 0; callers handle that case.
fn int_to_words(n: u64) -> String {
    let mut n = n;
    let mut parts: Vec<String> = Vec::new();

    for (scale, name) in TIERS {
        if n >= scale {
            parts.push(format!("{} {}", int_to_words(n / scale), name));
            n %= scale;
        }
    }

    if n > 0 {
        if n < 20 {
            parts.push(ONES[n as usize].to_string());
        } else if n % 10 == 0 {
            parts.push(TENS[(n / 10) as usize].to_string());
        } else {
            // Composed as "Tens Ones", e.g. 47 → "Forty Seven".
            parts.push(format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize]));
        }
    }

    parts.join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(amount_in_words(0.0), "Rupees Zero Only");
    }

    #[test]
    fn test_tier_fixed_points() {
        assert_eq!(amount_in_words(1.0), "Rupees One Only");
        assert_eq!(amount_in_words(100.0), "Rupees One Hundred Only");
        assert_eq!(amount_in_words(1000.0), "Rupees One Thousand Only");
        assert_eq!(amount_in_words(100000.0), "Rupees One Lakh Only");
        assert_eq!(amount_in_words(10000000.0), "Rupees One Crore Only");
    }

    #[test]
    fn test_tens_composition() {
        assert_eq!(amount_in_words(47.0), "Rupees Forty Seven Only");
        assert_eq!(amount_in_words(90.0), "Rupees Ninety Only");
        assert_eq!(amount_in_words(19.0), "Rupees Nineteen Only");
    }

    #[test]
    fn test_leading_group_recursion() {
        // 25,00,000: the Lakh tier itself reads "Twenty Five".
        assert_eq!(amount_in_words(2500000.0), "Rupees Twenty Five Lakh Only");
    }

    #[test]
    fn test_spec_decomposition() {
        assert_eq!(
            amount_in_words(1234567.89),
            "Rupees Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven and Eighty Nine Paise Only"
        );
    }

    #[test]
    fn test_paise_only() {
        assert_eq!(amount_in_words(0.5), "Rupees Zero and Fifty Paise Only");
    }

    #[test]
    fn test_paise_carry() {
        // .999 rounds to 100 paise and carries into the rupee part.
        assert_eq!(amount_in_words(1.999), "Rupees Two Only");
    }

    #[test]
    fn test_clamp_policy() {
        assert_eq!(amount_in_words(-42.0), "Rupees Zero Only");
        assert_eq!(amount_in_words(f64::NAN), "Rupees Zero Only");
        assert_eq!(amount_in_words(f64::INFINITY), "Rupees Zero Only");
    }

    #[test]
    fn test_crore_composition() {
        assert_eq!(
            amount_in_words(12345678.0),
            "Rupees One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Only"
        );
    }

    #[test]
    fn test_tax_amount_usage() {
        // Combined CGST+SGST for the 10x100 @ 9+9 scenario.
        assert_eq!(amount_in_words(180.0), "Rupees One Hundred Eighty Only");
    }
}
