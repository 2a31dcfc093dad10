// File: crates/growth-core/src/format.rs
// Summary: Dollar formatting for the headline, axis labels and hover readout.

/// `$1,234.56`; always two decimals with thousands separators.
pub fn format_money_exact(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// `$12,345`; rounded to whole dollars. Used for axis labels.
pub fn format_money_whole(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

/// Short form for the hover readout: `$950`, `$12.3k`, `$4.5M`, `$1.2B`.
/// A trailing `.0` is dropped (`$2k`, not `$2.0k`).
pub fn format_money_smart(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs < 1_000.0 {
        let whole = abs.round();
        let sign = if whole == 0.0 { "" } else { sign };
        return format!("{sign}${whole:.0}");
    }
    let (scaled, suffix) = if abs < 1_000_000.0 {
        (abs / 1_000.0, "k")
    } else if abs < 1_000_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else {
        (abs / 1_000_000_000.0, "B")
    };
    let one_decimal = format!("{scaled:.1}");
    let trimmed = one_decimal.strip_suffix(".0").unwrap_or(&one_decimal);
    format!("{sign}${trimmed}{suffix}")
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
