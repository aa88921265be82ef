//! Display formatters shared by the fetcher and the Telegram replies

use crate::config::DisplayConfig;
use crate::errors::ConfigError;
use num_format::{Locale, ToFormattedString};

/// Locale-aware currency formatting with an explicit configuration
///
/// Renders `1234567.8` as `$1,234,567.80` under the default configuration:
/// grouped integer part, locale decimal separator, fixed number of decimals,
/// symbol prefix, and a leading `-` for negative amounts.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    locale: Locale,
    symbol: String,
    decimals: u32,
}

impl CurrencyFormatter {
    pub fn new(locale: Locale, symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            locale,
            symbol: symbol.into(),
            decimals: decimals.min(9),
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self, ConfigError> {
        let locale = Locale::from_name(&config.locale)
            .map_err(|_| ConfigError::UnknownLocale(config.locale.clone()))?;
        Ok(Self::new(locale, config.currency_symbol.clone(), config.decimals))
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}", self.symbol, value);
        }

        // Exact decimal rounding of the binary value: ties go to even
        let magnitude = format!("{:.*}", self.decimals as usize, value.abs());
        let (whole, fraction) = match magnitude.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (magnitude.as_str(), None),
        };

        let sign = if value < 0.0 { "-" } else { "" };
        let grouped = match whole.parse::<u128>() {
            Ok(whole) => whole.to_formatted_string(&self.locale),
            Err(_) => whole.to_string(),
        };

        match fraction {
            Some(fraction) => format!(
                "{}{}{}{}{}",
                sign,
                self.symbol,
                grouped,
                self.locale.decimal(),
                fraction
            ),
            None => format!("{}{}{}", sign, self.symbol, grouped),
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Locale::en, "$", 2)
    }
}

/// Escape text for Telegram HTML parse mode
pub fn html_escape(text: &str) -> String {
    teloxide::utils::html::escape(text)
}

/// Wrap plain text in a `<pre>` block, escaping it first
pub fn html_pre(text: &str) -> String {
    format!("<pre>{}</pre>", html_escape(text))
}
