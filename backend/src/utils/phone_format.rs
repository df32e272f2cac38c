//! Best-effort E.164 formatting for phone numbers typed into lead forms.
//!
//! No numbering-plan lookups happen here. The rules below are tried in order
//! and the first one that matches decides the output, so a garbage input
//! still produces some `+`-prefixed string (an empty input becomes `"+1"`).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhoneRule {
    /// 11 digits starting with the North American country code.
    ElevenDigitsWithCountryCode,
    /// 10 digits, country code missing.
    TenDigitNational,
    /// Caller already wrote a `+`, the original text is kept as is.
    AlreadyInternational,
    /// Fallback, always matches.
    AssumeNorthAmerica,
}

struct Rule {
    kind: PhoneRule,
    matches: fn(original: &str, digits: &str) -> bool,
    format: fn(original: &str, digits: &str) -> String,
}

const RULES: [Rule; 4] = [
    Rule {
        kind: PhoneRule::ElevenDigitsWithCountryCode,
        matches: |_, digits| digits.len() == 11 && digits.starts_with('1'),
        format: |_, digits| format!("+{}", digits),
    },
    Rule {
        kind: PhoneRule::TenDigitNational,
        matches: |_, digits| digits.len() == 10,
        format: |_, digits| format!("+1{}", digits),
    },
    Rule {
        kind: PhoneRule::AlreadyInternational,
        matches: |original, _| original.starts_with('+'),
        format: |original, _| original.to_string(),
    },
    Rule {
        kind: PhoneRule::AssumeNorthAmerica,
        matches: |_, _| true,
        format: |_, digits| format!("+1{}", digits),
    },
];

/// Result of formatting plus the details worth logging about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPhone {
    pub original: String,
    pub formatted: String,
    pub rule: PhoneRule,
    pub length: usize,
    pub starts_with_plus: bool,
    pub digits_only: String,
    pub digits_length: usize,
}

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn format_phone_number(phone: &str) -> String {
    classify(phone).1
}

/// Formats `phone` and reports which rule produced the result.
pub fn classify(phone: &str) -> (PhoneRule, String) {
    let digits = digits_of(phone);
    for rule in RULES.iter() {
        if (rule.matches)(phone, &digits) {
            return (rule.kind, (rule.format)(phone, &digits));
        }
    }
    // The last rule always matches, this only keeps the compiler happy.
    (PhoneRule::AssumeNorthAmerica, format!("+1{}", digits))
}

pub fn describe(phone: &str) -> FormattedPhone {
    let (rule, formatted) = classify(phone);
    let digits_only = digits_of(&formatted);
    FormattedPhone {
        original: phone.to_string(),
        length: formatted.len(),
        starts_with_plus: formatted.starts_with('+'),
        digits_length: digits_only.len(),
        digits_only,
        formatted,
        rule,
    }
}
