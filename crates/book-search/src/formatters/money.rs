//! Locale-aware currency and percentage formatting.

use crate::messages::Locale;
use crate::models::Price;

/// Formats prices and percentages for one locale.
///
/// Built once at startup from the configured locale and passed to the
/// formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormat {
    locale: Locale,
}

impl MoneyFormat {
    /// Create a formatter for a locale.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Currency used when a price carries no currency code.
    #[must_use]
    pub const fn default_currency(self) -> &'static str {
        match self.locale {
            Locale::En => "USD",
            Locale::Pt => "BRL",
        }
    }

    /// Format a price in its own currency.
    #[must_use]
    pub fn price(self, price: &Price) -> String {
        self.amount(price.amount, price.currency_code.as_deref())
    }

    /// Format an amount in the given currency (or the locale default).
    #[must_use]
    pub fn amount(self, amount: f64, currency_code: Option<&str>) -> String {
        let code = currency_code.unwrap_or_else(|| self.default_currency());
        let number = self.number(amount, minor_digits(code));
        let sign = if amount < 0.0 { "-" } else { "" };

        match (currency_symbol(code), self.locale) {
            (Some(symbol), Locale::En) => format!("{sign}{symbol}{number}"),
            (Some(symbol), Locale::Pt) => format!("{sign}{symbol} {number}"),
            (None, _) => format!("{sign}{code} {number}"),
        }
    }

    /// Format a fraction (0.2) as a whole percentage ("20%").
    #[must_use]
    pub fn percent(self, fraction: f64) -> String {
        format!("{}%", (fraction * 100.0).round() as i64)
    }

    /// Absolute value with grouping and the locale's decimal separator.
    fn number(self, amount: f64, digits: usize) -> String {
        let fixed = format!("{:.*}", digits, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = group_digits(int_part, self.locale.group_separator());
        if let Some(frac) = frac_part {
            out.push(self.locale.decimal_separator());
            out.push_str(frac);
        }
        out
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "BRL" => Some("R$"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn minor_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
