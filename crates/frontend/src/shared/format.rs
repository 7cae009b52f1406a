//! Number formatting for tables and totals.

/// Money with two decimals and Indian digit grouping: `12,34,567.89`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_indian(int_part), frac_part)
}

/// Quantity with up to three decimals, trailing zeros dropped
pub fn format_quantity(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.891), "12,34,567.89");
        assert_eq!(format_amount(100000.0), "1,00,000.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(0.1234), "0.123");
        assert_eq!(format_quantity(0.0), "0");
    }
}
