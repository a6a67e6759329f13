//! Currency value cleaning and display formatting for price fields.
//!
//! The price field shows a formatted string (`₹12,34,567.50`) but reports the
//! bare numeric string (`1234567.50`) to its owner. [`CurrencyFormat::clean_value`]
//! goes from whatever the user typed to the reported value;
//! [`CurrencyFormat::format_value`] goes from the owned value back to display.

/// Digit grouping convention
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Grouping {
    /// 12,34,567 - last three digits, then pairs
    Indian,
    /// 1,234,567
    Thousands,
}

/// Locale/currency pair plus the decimal limit for a price field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CurrencyFormat {
    pub locale: &'static str,
    pub currency: &'static str,
    pub symbol: &'static str,
    pub grouping: Grouping,
    pub decimals_limit: usize,
}

impl CurrencyFormat {
    /// The format every price field uses
    pub const INR: CurrencyFormat = CurrencyFormat {
        locale: "en-IN",
        currency: "INR",
        symbol: "\u{20B9}",
        grouping: Grouping::Indian,
        decimals_limit: 2,
    };

    /// Reduce typed or displayed text to the numeric value it represents.
    ///
    /// Keeps one leading `-` and the first `.`, drops every other
    /// non-digit, and truncates the fraction at `decimals_limit`.
    /// Returns `None` when nothing numeric is left.
    pub fn clean_value(&self, raw: &str) -> Option<String> {
        let mut negative = false;
        let mut int = String::new();
        let mut frac: Option<String> = None;

        for c in raw.chars() {
            match c {
                '-' if int.is_empty() && frac.is_none() => negative = true,
                '.' if frac.is_none() && self.decimals_limit > 0 => frac = Some(String::new()),
                '0'..='9' => match frac.as_mut() {
                    Some(f) if f.len() < self.decimals_limit => f.push(c),
                    Some(_) => {}
                    None => int.push(c),
                },
                _ => {}
            }
        }

        if !negative && int.is_empty() && frac.is_none() {
            return None;
        }

        let mut out = String::with_capacity(int.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&int);
        if let Some(f) = frac {
            out.push('.');
            out.push_str(&f);
        }
        Some(out)
    }

    /// Display form of an owned value. A trailing `.` survives so the user
    /// can keep typing the fraction.
    pub fn format_value(&self, value: &str) -> String {
        let Some(clean) = self.clean_value(value) else {
            return String::new();
        };

        let (negative, rest) = match clean.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, clean.as_str()),
        };
        let (int, frac) = match rest.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (rest, None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(&self.group(int));
        if let Some(frac) = frac {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let width = match self.grouping {
            Grouping::Indian => 2,
            Grouping::Thousands => 3,
        };

        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(width);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::INR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INR: CurrencyFormat = CurrencyFormat::INR;

    #[test]
    fn clean_strips_symbol_and_separators() {
        assert_eq!(INR.clean_value("\u{20B9}12,34,567").as_deref(), Some("1234567"));
        assert_eq!(INR.clean_value("12 abc 3").as_deref(), Some("123"));
    }

    #[test]
    fn clean_empty_is_none() {
        assert_eq!(INR.clean_value(""), None);
        assert_eq!(INR.clean_value("\u{20B9}"), None);
        assert_eq!(INR.clean_value(","), None);
    }

    #[test]
    fn clean_limits_decimals() {
        assert_eq!(INR.clean_value("10.999").as_deref(), Some("10.99"));
        assert_eq!(INR.clean_value("10.").as_deref(), Some("10."));
        assert_eq!(INR.clean_value("1.2.3").as_deref(), Some("1.23"));
    }

    #[test]
    fn clean_keeps_only_leading_minus() {
        assert_eq!(INR.clean_value("-50").as_deref(), Some("-50"));
        assert_eq!(INR.clean_value("5-0").as_deref(), Some("50"));
        assert_eq!(INR.clean_value("-").as_deref(), Some("-"));
    }

    #[test]
    fn format_uses_indian_grouping() {
        assert_eq!(INR.format_value("1234567"), "\u{20B9}12,34,567");
        assert_eq!(INR.format_value("123"), "\u{20B9}123");
        assert_eq!(INR.format_value("1000"), "\u{20B9}1,000");
        assert_eq!(INR.format_value("100000"), "\u{20B9}1,00,000");
    }

    #[test]
    fn format_keeps_fraction_and_trailing_dot() {
        assert_eq!(INR.format_value("1500.5"), "\u{20B9}1,500.5");
        assert_eq!(INR.format_value("1500."), "\u{20B9}1,500.");
    }

    #[test]
    fn format_negative_and_empty() {
        assert_eq!(INR.format_value("-2500"), "-\u{20B9}2,500");
        assert_eq!(INR.format_value(""), "");
    }

    #[test]
    fn thousands_grouping() {
        let usd = CurrencyFormat {
            locale: "en-US",
            currency: "USD",
            symbol: "$",
            grouping: Grouping::Thousands,
            decimals_limit: 2,
        };
        assert_eq!(usd.format_value("1234567"), "$1,234,567");
    }

    #[test]
    fn zero_decimal_limit_drops_fraction() {
        let whole = CurrencyFormat {
            decimals_limit: 0,
            ..CurrencyFormat::INR
        };
        assert_eq!(whole.clean_value("12.5").as_deref(), Some("125"));
    }
}
