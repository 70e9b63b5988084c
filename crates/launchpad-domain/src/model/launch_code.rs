//! LaunchCode - The short code stamped on a rocket at creation
//!
//! LaunchCode is a Value Object: exactly five lowercase hex digits.
//! Codes are unique in practice, not by construction.

/// Error returned when text is not a valid launch code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLaunchCode {
    pub value: String,
}

impl core::fmt::Display for InvalidLaunchCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Invalid launch code '{}': expected {} lowercase hex digits",
            self.value,
            LaunchCode::LENGTH
        )
    }
}

impl std::error::Error for InvalidLaunchCode {}

/// Five lowercase hexadecimal digits (`^[a-f0-9]{5}$`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaunchCode(String);

impl LaunchCode {
    /// Number of characters in every launch code
    pub const LENGTH: usize = 5;

    /// Number of bits a code carries (one hex digit = 4 bits)
    pub const BITS: u32 = (Self::LENGTH as u32) * 4;

    /// Mask selecting the bits that end up in a code
    pub const MASK: u32 = (1 << Self::BITS) - 1;

    /// Build a code from the low 20 bits of `bits`.
    ///
    /// Higher bits are discarded, so every `u32` maps to a valid code
    /// and every code has exactly one 20-bit preimage.
    pub fn from_bits(bits: u32) -> Self {
        Self(format!("{:05x}", bits & Self::MASK))
    }

    /// Validate untrusted text as a launch code
    pub fn parse(value: &str) -> Result<Self, InvalidLaunchCode> {
        let well_formed = value.len() == Self::LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if well_formed {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidLaunchCode {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LaunchCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for LaunchCode {
    type Err = InvalidLaunchCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_pads_with_zeros() {
        assert_eq!(LaunchCode::from_bits(0).as_str(), "00000");
        assert_eq!(LaunchCode::from_bits(0xab).as_str(), "000ab");
        assert_eq!(LaunchCode::from_bits(0xFFFFF).as_str(), "fffff");
    }

    #[test]
    fn test_from_bits_discards_high_bits() {
        assert_eq!(LaunchCode::from_bits(0xFFF0_0001).as_str(), "00001");
        assert_eq!(LaunchCode::from_bits(u32::MAX).as_str(), "fffff");
    }

    #[test]
    fn test_parse_accepts_lowercase_hex() {
        let code = LaunchCode::parse("0a9f3").unwrap();
        assert_eq!(code.as_str(), "0a9f3");
        assert_eq!(code.to_string(), "0a9f3");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        for bad in ["", "abcd", "abcdef", "ABCDE", "abcdg", "12 45", "ａbcde"] {
            let err = LaunchCode::parse(bad).unwrap_err();
            assert_eq!(err.value, bad);
        }
    }

    #[test]
    fn test_parse_round_trips_generated_codes() {
        for bits in [0, 1, 0x7_1234, 0xF_FFFF] {
            let code = LaunchCode::from_bits(bits);
            assert_eq!(code.as_str().parse::<LaunchCode>().unwrap(), code);
        }
    }
}
