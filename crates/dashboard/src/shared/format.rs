/// Formats an amount with thousands separators and two decimals
///
/// # Examples
/// ```
/// use dashboard::shared::format::format_amount;
/// assert_eq!(format_amount(1234567.5), "1,234,567.50");
/// assert_eq!(format_amount(42.0), "42.00");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, fraction)
}

/// Formats an amount as account currency
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

/// Formats a percentage with one decimal for summary cards
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(42.0), "42.00");
        assert_eq!(format_amount(999.99), "999.99");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
        assert_eq!(format_amount(-175.0), "-175.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(175.0), "$175.00");
        assert_eq!(format_currency(2500.0), "$2,500.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
