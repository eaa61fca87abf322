//! Application identifiers

use std::{fmt, str::FromStr};

use bytes::Bytes;

use crate::{
    Error,
    constants::{AID_MAX_LEN, AID_MIN_LEN, AID_PREFIX, AID_SUFFIX, SHORT_AID_THRESHOLD},
};

/// Application identifier, 5 to 16 bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Aid(Bytes);

impl Aid {
    /// Create an AID from raw bytes, checking the length
    pub fn new(bytes: impl Into<Bytes>) -> Result<Self, Error> {
        let bytes = bytes.into();
        if !(AID_MIN_LEN..=AID_MAX_LEN).contains(&bytes.len()) {
            return Err(Error::InvalidAidLength(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Raw identifier bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Shared handle to the identifier bytes
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }
}

impl AsRef<[u8]> for Aid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::new(Bytes::copy_from_slice(bytes))
    }
}

impl FromStr for Aid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(hex::decode(s.trim())?)
    }
}

impl fmt::Display for Aid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

/// Expand a short application id using the default vendor prefix and suffix
pub fn expand_identifier(identifier: &str) -> String {
    expand_identifier_with(identifier, AID_PREFIX, AID_SUFFIX, SHORT_AID_THRESHOLD)
}

/// Expand `identifier` to `prefix + identifier + suffix` when it has fewer than
/// `threshold` characters, otherwise return it unchanged
pub fn expand_identifier_with(
    identifier: &str,
    prefix: &str,
    suffix: &str,
    threshold: usize,
) -> String {
    if identifier.chars().count() < threshold {
        format!("{prefix}{identifier}{suffix}")
    } else {
        identifier.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_expand_short_identifier() {
        assert_eq!(expand_identifier("c8e4a0c4"), "A00000061700c8e4a0c401");
        assert_eq!(expand_identifier(""), "A0000006170001");
    }

    #[test]
    fn test_long_identifier_unchanged() {
        assert_eq!(expand_identifier("A00000061701"), "A00000061701");
        assert_eq!(expand_identifier("123456789"), "123456789");
    }

    #[test]
    fn test_expand_with_custom_parts() {
        assert_eq!(expand_identifier_with("01", "F0", "FF", 4), "F001FF");
        assert_eq!(expand_identifier_with("0102", "F0", "FF", 4), "0102");
    }

    #[test]
    fn test_parse_aid() {
        let aid: Aid = "a00000061700c8e4a0c401".parse().unwrap();
        assert_eq!(aid.as_bytes(), hex!("A00000061700C8E4A0C401"));
        assert_eq!(aid.to_string(), "A00000061700C8E4A0C401");
    }

    #[test]
    fn test_parse_aid_errors() {
        assert!(matches!("A0000".parse::<Aid>(), Err(Error::InvalidAidHex(_))));
        assert!(matches!("zz000000".parse::<Aid>(), Err(Error::InvalidAidHex(_))));
        assert!(matches!(
            "A0000006".parse::<Aid>(),
            Err(Error::InvalidAidLength(4))
        ));
        assert!(matches!(
            Aid::try_from(&[0u8; 17][..]),
            Err(Error::InvalidAidLength(17))
        ));
        assert!(Aid::try_from(&[0u8; 5][..]).is_ok());
        assert!(Aid::try_from(&[0u8; 16][..]).is_ok());
    }
}
