//! Number formatting for chart values

/// Groups the integer part with `,` and keeps up to three fraction digits,
/// trailing zeros dropped.
///
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(1234567.5), "1,234,567.5");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.3}", value);
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0" after rounding a tiny negative value
    let sign = if grouped == "0" && fraction_part.is_empty() { "" } else { sign };

    if fraction_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction_part}")
    }
}
