use serde::{Deserialize, Serialize};

/// Significant digits used for axis tick labels.
pub const TICK_LABEL_SIGNIFICANT_DIGITS: usize = 6;

/// Locale used by built-in numeric label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl AxisLabelLocale {
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }
}

/// Formats `value` with at most `digits` significant digits.
///
/// Values whose decimal exponent is below `-5` or at least `digits` switch
/// to scientific notation (`1.5E+07`). Trailing fractional zeros are
/// trimmed and negative zero prints as `0`.
#[must_use]
pub fn format_significant(value: f64, digits: usize, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let digits = digits.max(1);
    // Scientific formatting performs the rounding, so a value like 999999.7
    // reports the exponent it actually rounds to.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let text = if exponent < -5 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{sign}{:02}",
            trim_fraction(mantissa.to_owned()),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{value:.decimals$}"))
    };

    localize(text, locale)
}

/// Label text for a tick value; `None` marks the origin tick whose numeric
/// label is suppressed.
#[must_use]
pub fn format_tick_label(value: f64, locale: AxisLabelLocale) -> Option<String> {
    let text = format_significant(value, TICK_LABEL_SIGNIFICANT_DIGITS, locale);
    if text == "0" { None } else { Some(text) }
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" { "0".to_owned() } else { text }
}

fn localize(text: String, locale: AxisLabelLocale) -> String {
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::EsEs => text.replace('.', ","),
    }
}
