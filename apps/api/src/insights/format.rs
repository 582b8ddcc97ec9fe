//! Display-time currency formatting for insight salaries.

use serde::Serialize;

use crate::insights::models::SalaryFigures;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryDisplay {
    pub min: String,
    pub avg: String,
    pub max: String,
}

impl From<&SalaryFigures> for SalaryDisplay {
    fn from(figures: &SalaryFigures) -> Self {
        Self {
            min: format_inr(figures.min),
            avg: format_inr(figures.avg),
            max: format_inr(figures.max),
        }
    }
}

/// Formats rupees with Indian digit grouping and no fraction digits,
/// e.g. `1200000.0` → `₹12,00,000`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{amount}");
    }

    let rounded = amount.abs().round();
    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    let digits = format!("{rounded:.0}");
    format!("{sign}₹{}", group_indian(&digits))
}

/// Last three digits form one group; everything before is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
