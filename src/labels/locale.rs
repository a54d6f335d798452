//! Locale-dependent digit grouping and decimal separators.

use num_format::{Grouping, Locale};

/// Number formatting conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    grouping: &'static Locale,
    decimal: char,
}

impl NumberLocale {
    /// Map a user-provided locale tag to grouping rules and a decimal separator.
    ///
    /// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
    /// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
    pub fn from_tag(tag: &str) -> Self {
        let (grouping, decimal) = match tag.to_lowercase().as_str() {
            "de" | "de_de" | "german" => (&Locale::de, ','),
            "fr" | "fr_fr" => (&Locale::fr, ','),
            "es" | "es_es" => (&Locale::es, ','),
            "it" | "it_it" => (&Locale::it, ','),
            "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
            "nl" | "nl_nl" => (&Locale::nl, ','),
            _ => (&Locale::en, '.'),
        };
        Self { grouping, decimal }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal
    }

    /// Insert the locale's group separators into a run of ASCII digits.
    ///
    /// Works on the digit string itself, so integers of any length are grouped.
    /// Input containing anything other than ASCII digits is returned unchanged.
    pub fn group_integer(&self, digits: &str) -> String {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return digits.to_string();
        }
        // (first group from the right, every following group)
        let (first, rest) = match self.grouping.grouping() {
            Grouping::Standard => (3, 3),
            Grouping::Indian => (3, 2),
            Grouping::Posix => return digits.to_string(),
        };

        let mut groups = Vec::new();
        let mut end = digits.len();
        let mut size = first;
        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
            size = rest;
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.join(self.grouping.separator())
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::from_tag("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_german_grouping() {
        let en = NumberLocale::from_tag("en_US");
        assert_eq!(en.group_integer("1234567"), "1,234,567");
        assert_eq!(en.decimal_separator(), '.');

        let de = NumberLocale::from_tag("DE");
        assert_eq!(de.group_integer("30000"), "30.000");
        assert_eq!(de.decimal_separator(), ',');
    }

    #[test]
    fn groups_digits_beyond_u64() {
        let en = NumberLocale::default();
        assert_eq!(
            en.group_integer("123456789012345678901234"),
            "123,456,789,012,345,678,901,234"
        );
        assert_eq!(en.group_integer("999"), "999");
        assert_eq!(en.group_integer("1000"), "1,000");
        assert_eq!(en.group_integer(""), "");
        assert_eq!(en.group_integer("12a4"), "12a4");
    }

    #[test]
    fn unknown_tag_falls_back_to_english() {
        assert_eq!(NumberLocale::from_tag("xx"), NumberLocale::default());
    }
}
