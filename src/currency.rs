//! Formats amounts of money for display.
//!
//! Amounts are shown in Brazilian reais with `.` grouping thousands and `,`
//! separating two decimal places, e.g. `R$ 1.234,56`.

/// The currency symbol prefixed to formatted values.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Format `value` as a currency string, e.g. `R$ 1.500,50`.
///
/// Negative values put the minus sign before the symbol (`-R$ 10,00`).
/// Values that are not a number are shown as `R$ NaN`.
pub fn format_value(value: f64) -> String {
    let amount = format_amount(value);

    match amount.strip_prefix('-') {
        Some(magnitude) => format!("-{CURRENCY_SYMBOL} {magnitude}"),
        None => format!("{CURRENCY_SYMBOL} {amount}"),
    }
}

/// Format `value` with thousands grouping and two decimal places, without a
/// currency symbol, e.g. `1.500,50`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_owned();
    }

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut cents = ((magnitude - whole) * 100.0).round();
    if cents >= 100.0 {
        whole += 1.0;
        cents = 0.0;
    }

    // Amounts that round to zero never show a sign.
    let sign = if value < 0.0 && (whole > 0.0 || cents > 0.0) {
        "-"
    } else {
        ""
    };

    format!("{sign}{},{cents:02.0}", group_thousands(whole))
}

/// Write the integer `whole` in full, with `.` between groups of three digits.
fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}
