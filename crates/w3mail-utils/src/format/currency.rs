//! Currency and token amount formatting.

/// Inserts `,` every three digits of an unsigned integer string.
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

/// Formats a dollar amount as `$1,234.50`.
///
/// Works on the decimal expansion of the rounded cent value, so amounts
/// beyond the integer types still print every digit.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let scaled = (amount.abs() * 100.0).round();
    let mut cents = if scaled.is_finite() {
        format!("{scaled:.0}")
    } else {
        // Already integral at this magnitude.
        format!("{:.0}00", amount.abs())
    };
    if cents.len() < 3 {
        cents = format!("{cents:0>3}");
    }
    let (whole, frac) = cents.split_at(cents.len() - 2);
    let sign = if amount < 0.0 && cents.bytes().any(|b| b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Formats a raw on-chain integer amount with `decimals` places.
///
/// `format_token_amount(1_500_000_000_000_000_000, 18, "ETH")` gives
/// `1.5 ETH`. Trailing zeros are trimmed; integer arithmetic only.
#[must_use]
pub fn format_token_amount(raw: u128, decimals: u8, symbol: &str) -> String {
    let decimals = u32::from(decimals.min(38));
    let divisor = 10_u128.pow(decimals);
    let whole = group_thousands(&(raw / divisor).to_string());
    let frac = raw % divisor;

    let mut amount = whole;
    if frac > 0 {
        let frac = format!("{frac:0width$}", width = decimals as usize);
        amount.push('.');
        amount.push_str(frac.trim_end_matches('0'));
    }

    if symbol.is_empty() {
        amount
    } else {
        format!("{amount} {symbol}")
    }
}

/// Abbreviates large numbers: `1.2K`, `3.4M`, `5.6B`, `7.8T`.
#[must_use]
pub fn format_compact(n: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    if !n.is_finite() {
        return "0".to_string();
    }
    for (scale, suffix) in UNITS {
        if n.abs() >= scale {
            let scaled = format!("{:.1}", n / scale);
            let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{scaled}{suffix}");
        }
    }
    format!("{n:.0}")
}
