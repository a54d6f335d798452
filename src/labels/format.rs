//! printf-style label specifiers such as `"%.2f"` or `"$%,.0f k"`.

use crate::error::{ChartError, Result};

use super::locale::NumberLocale;

/// printf's precision when the specifier gives none.
const DEFAULT_PRECISION: usize = 6;

/// A parsed float specifier: `prefix %[,][.N]f suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    prefix: String,
    suffix: String,
    precision: usize,
    grouping: bool,
}

impl LabelFormat {
    /// Parse a specifier. `%%` stands for a literal percent sign.
    ///
    /// ### Errors
    /// [`ChartError::InvalidSpecifier`] when there is no conversion, more than one,
    /// or a conversion other than `f`.
    pub fn parse(specifier: &str) -> Result<Self> {
        let invalid = |reason: &str| ChartError::InvalidSpecifier {
            specifier: specifier.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion: Option<(usize, bool)> = None;
        let mut chars = specifier.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                out.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                out.push('%');
                continue;
            }
            if conversion.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut grouping = false;
            while chars.peek() == Some(&',') || chars.peek() == Some(&'\'') {
                chars.next();
                grouping = true;
            }
            let mut precision = DEFAULT_PRECISION;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut digits = String::new();
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    digits.push(d);
                    chars.next();
                }
                // "%.f" means precision 0, as in printf.
                precision = if digits.is_empty() {
                    0
                } else {
                    digits.parse().map_err(|_| invalid("precision out of range"))?
                };
            }
            match chars.next() {
                Some('f') | Some('F') => conversion = Some((precision, grouping)),
                Some(other) => {
                    return Err(invalid(&format!("unsupported conversion '{other}'")));
                }
                None => return Err(invalid("unterminated conversion")),
            }
        }

        let (precision, grouping) = conversion.ok_or_else(|| invalid("no %f conversion"))?;
        Ok(Self {
            prefix,
            suffix,
            precision,
            grouping,
        })
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Render `value` with this format's precision and the locale's separators.
    pub fn format(&self, value: f64, locale: &NumberLocale) -> String {
        if !value.is_finite() {
            return format!("{}{}{}", self.prefix, value, self.suffix);
        }
        let body = format!("{:.*}", self.precision, value.abs());
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body.as_str(), None),
        };

        let mut out = self.prefix.clone();
        // A value that rounds to zero prints without a sign.
        if value < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        if self.grouping {
            out.push_str(&locale.group_integer(int_part));
        } else {
            out.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            out.push(locale.decimal_separator());
            out.push_str(frac);
        }
        out.push_str(&self.suffix);
        out
    }
}
