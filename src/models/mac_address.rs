use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MacGenError;

/// Separator placed between the octets of a rendered MAC address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// `3f:0a:9c:12:88:00`
    #[default]
    Colon,

    /// `3f-0a-9c-12-88-00`
    Hyphen,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Colon => ':',
            Delimiter::Hyphen => '-',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A MAC address together with the delimiter used to render it.
///
/// Renders as six two-digit lowercase hex octets, e.g. `3f:0a:9c:12:88:00`.
/// Serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress {
    octets: [u8; 6],
    delimiter: Delimiter,
}

impl MacAddress {
    pub fn new(octets: [u8; 6], delimiter: Delimiter) -> Self {
        Self { octets, delimiter }
    }

    /// The raw octets.
    pub fn octets(&self) -> [u8; 6] {
        self.octets
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// The same address rendered with another delimiter.
    pub fn with_delimiter(self, delimiter: Delimiter) -> Self {
        Self { delimiter, ..self }
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.delimiter.as_char();
        for (i, octet) in self.octets.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MacAddress {
    type Err = MacGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MacGenError::InvalidMacAddress(s.to_string());

        let delimiter = match (s.contains(':'), s.contains('-')) {
            (true, false) => Delimiter::Colon,
            (false, true) => Delimiter::Hyphen,
            _ => return Err(invalid()),
        };

        let mut octets = [0u8; 6];
        let mut parts = s.split(delimiter.as_char());
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { octets, delimiter })
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
