//! Validation of discount and tip percentages entered by the user.
//!
//! The store keeps whatever integer it is handed, so everything typed into a
//! percentage field passes through here first. Accepted input is 0 to 3 ASCII
//! digits, with the empty string meaning 0. A [`PercentPolicy`] then decides
//! what happens to values above 100.

use std::fmt;
use std::str::FromStr;

/// Longest digit run accepted for a percentage.
pub const MAX_PERCENT_DIGITS: usize = 3;

/// Upper bound applied by [`PercentPolicy::Clamp`].
pub const MAX_PERCENT: u32 = 100;

/// Discount choices offered next to the free-text field.
pub const DISCOUNT_PRESETS: [u32; 6] = [0, 5, 10, 15, 20, 25];

/// Tip choices offered next to the free-text field.
pub const TIP_PRESETS: [u32; 6] = [0, 5, 10, 25, 50, 100];

/// Reason a raw percentage string was refused by [`parse_percent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercentInputError {
    TooLong { len: usize },
    NonDigit { input: String },
}

impl fmt::Display for PercentInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { len } => {
                write!(
                    f,
                    "percentage has {len} digits, at most {MAX_PERCENT_DIGITS} allowed"
                )
            }
            Self::NonDigit { input } => {
                write!(f, "percentage must contain only digits, got {input:?}")
            }
        }
    }
}

impl std::error::Error for PercentInputError {}

/// How percentages above 100 are treated once parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PercentPolicy {
    /// Cap at 100.
    #[default]
    Clamp,
    /// Keep the value; a discount over 100 makes the order total negative.
    Allow,
}

impl PercentPolicy {
    /// Applies the policy to an already parsed value.
    #[must_use]
    pub fn apply(self, value: u32) -> u32 {
        match self {
            PercentPolicy::Clamp => value.min(MAX_PERCENT),
            PercentPolicy::Allow => value,
        }
    }

    /// Returns the configuration name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            PercentPolicy::Clamp => "clamp",
            PercentPolicy::Allow => "allow",
        }
    }
}

impl FromStr for PercentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamp" => Ok(PercentPolicy::Clamp),
            "allow" => Ok(PercentPolicy::Allow),
            other => Err(format!("unknown percent policy {other:?}")),
        }
    }
}

/// Parses `raw` strictly: 0 to 3 ASCII digits, empty meaning 0.
///
/// # Errors
///
/// Returns [`PercentInputError::NonDigit`] if anything other than a digit
/// appears and [`PercentInputError::TooLong`] for more than 3 digits.
pub fn parse_percent(raw: &str) -> Result<u32, PercentInputError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PercentInputError::NonDigit {
            input: raw.to_string(),
        });
    }
    if raw.len() > MAX_PERCENT_DIGITS {
        return Err(PercentInputError::TooLong { len: raw.len() });
    }
    Ok(digits_value(raw))
}

/// Reduces free text to a percentage: keeps only ASCII digits, at most the
/// first 3 of them, and maps an empty result to 0.
///
/// `"abc"` and `""` both give 0; `"150"` gives 150.
pub fn sanitize_percent(raw: &str) -> u32 {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PERCENT_DIGITS)
        .collect();
    digits_value(&digits)
}

/// Full boundary path for free-text entry: sanitize, then apply `policy`.
pub fn validate_percent_input(raw: &str, policy: PercentPolicy) -> u32 {
    policy.apply(sanitize_percent(raw))
}

// At most three digits, so the fold cannot overflow.
fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
