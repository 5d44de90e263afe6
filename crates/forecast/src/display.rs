//! Human-readable figures for the prediction card.

/// Format a currency amount in millions, e.g. `$1,234.57M`.
pub fn format_millions(amount: f64) -> String {
    let formatted = format!("{:.2}", amount / 1_000_000.0);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{sign}${}.{fraction}M", group_thousands(whole))
}

/// Format a percentage with one decimal, e.g. `149.9%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(749_575_980.39), "$749.58M");
        assert_eq!(format_millions(1_234_567_890.0), "$1,234.57M");
        assert_eq!(format_millions(12_345_678_901_234.0), "$12,345,678.90M");
        assert_eq!(format_millions(500_000.0), "$0.50M");
        assert_eq!(format_millions(-2_500_000.0), "-$2.50M");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1399.16), "1399.2%");
        assert_eq!(format_percent(-12.34), "-12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
