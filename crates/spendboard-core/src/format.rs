//! Number formatting for cards, chart axes and tables

/// Two decimals with thousands separators: `1,234.56`
pub fn format_amount(value: f64) -> String {
    format_grouped(value, 2)
}

/// Whole number with thousands separators, for axis ticks and pie labels
pub fn format_axis(value: f64) -> String {
    format_grouped(value, 0)
}

/// `1,234.56 EUR`
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", format_amount(value), currency)
}

fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.00 prints as 0.00
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
