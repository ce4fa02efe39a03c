//! Station code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid 5-digit Renfe station code.
///
/// Cercanías station codes are always 5 ASCII digits (e.g. `51405` for
/// Cádiz). This type guarantees that any `StationId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use bahia_server::domain::StationId;
///
/// let cadiz = StationId::parse("51405").unwrap();
/// assert_eq!(cadiz.as_str(), "51405");
///
/// // Non-digits are rejected
/// assert!(StationId::parse("514a5").is_err());
///
/// // Wrong length is rejected
/// assert!(StationId::parse("5140").is_err());
/// assert!(StationId::parse("514050").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId([u8; 5]);

impl StationId {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly 5 ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(InvalidStationId {
                reason: "must be exactly 5 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(InvalidStationId {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        Ok(StationId([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationId::parse(&s).map_err(serde::de::Error::custom)
    }
}
