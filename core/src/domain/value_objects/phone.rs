//! Canonical Sri Lankan phone number value object.
//!
//! A [`NormalizedPhone`] always holds `+94` followed by exactly nine
//! national digits. It can only be produced by [`NormalizedPhone::parse`],
//! so any value of this type is known to be canonical.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use hf_shared::utils::phone::{digits_only, is_lk_international, is_lk_local, mask_phone, strip_formatting};

/// The raw phone string could not be normalized to a Sri Lankan number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Enter a valid Sri Lankan number (e.g. 0771234567 or +94771234567).")]
pub struct InvalidPhone;

/// A Sri Lankan phone number in canonical `+94XXXXXXXXX` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    /// Normalize a free-form phone string into canonical form.
    ///
    /// Accepted inputs, after stripping everything outside `[0-9+]`:
    /// - `+94XXXXXXXXX` (11 digits after the `+`)
    /// - `94XXXXXXXXX` (11 digits, `+` prepended)
    /// - a local number `0XXXXXXXXX` (exactly 10 digits in the raw input),
    ///   where the trunk `0` is replaced by `+94`
    ///
    /// Anything else is rejected. There is no partial normalization.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhone> {
        let stripped = strip_formatting(raw);

        if stripped.starts_with("+94") || stripped.starts_with("94") {
            let digits = digits_only(&stripped);
            if is_lk_international(&digits) {
                return Ok(Self(format!("+{}", digits)));
            }
            return Err(InvalidPhone);
        }

        // Local trunk form is judged over the digits of the original input
        let digits = digits_only(raw);
        if is_lk_local(&digits) {
            return Ok(Self(format!("+94{}", &digits[1..])));
        }

        Err(InvalidPhone)
    }

    /// The canonical `+94XXXXXXXXX` string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The nine national digits after the country code
    pub fn national_digits(&self) -> &str {
        &self.0[3..]
    }

    /// Digits-only form (`94XXXXXXXXX`), as used in wa.me addresses
    pub fn wa_address(&self) -> &str {
        &self.0[1..]
    }

    /// Masked form for logs (last four digits only)
    pub fn masked(&self) -> String {
        mask_phone(&self.0)
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NormalizedPhone {
    type Error = InvalidPhone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NormalizedPhone> for String {
    fn from(phone: NormalizedPhone) -> Self {
        phone.0
    }
}
