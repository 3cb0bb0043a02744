use serde::{Deserialize, Serialize};
use std::fmt;

/// Display scale for prices: one lakh rupees
pub const LAKH: f64 = 100_000.0;

/// Point estimate produced by the price model, in rupees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PriceEstimate(pub f64);

impl PriceEstimate {
    /// Raw model output in rupees
    pub fn rupees(&self) -> f64 {
        self.0
    }

    /// Value in lakhs as written to the search log: rupees rounded to
    /// two decimals, then divided by the display scale
    pub fn lakhs(&self) -> f64 {
        ((self.0 * 100.0).round() / 100.0) / LAKH
    }

    /// Human readable form, e.g. "₹ 1,234.50 Lakhs"
    pub fn display(&self) -> String {
        format!("₹ {} Lakhs", format_grouped(self.lakhs()))
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format with two decimals and comma thousands separators
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
