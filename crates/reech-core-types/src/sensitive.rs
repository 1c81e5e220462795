//! Sensitive data marker for automatic redaction
//!
//! `Sensitive<T>` hides its value from `Debug` and `Display`, so personal
//! data such as a government identifier can sit inside a record that is
//! freely logged. Serialization is transparent: the ledger stores the raw
//! value, only formatting is redacted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use reech_core_types::Sensitive;
///
/// let govt_id = Sensitive::new("GOV123".to_string());
/// assert_eq!(format!("{:?}", govt_id), "***REDACTED***");
/// assert_eq!(govt_id.expose(), "GOV123");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Serialize> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_redacted() {
        let secret = Sensitive::new("GOV-998877");
        assert_eq!(format!("{:?}", secret), REDACTED);
        assert_eq!(format!("{}", secret), REDACTED);
    }

    #[test]
    fn test_serializes_inner_value() {
        let secret = Sensitive::new("GOV-1".to_string());
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"GOV-1\"");

        let back: Sensitive<String> = serde_json::from_str("\"GOV-1\"").unwrap();
        assert_eq!(back, secret);
    }

    #[test]
    fn test_redacted_inside_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Holder {
            name: String,
            govt_id: Sensitive<String>,
        }

        let holder = Holder {
            name: "John Doe".to_string(),
            govt_id: Sensitive::new("GOV123".to_string()),
        };

        let debug_str = format!("{:?}", holder);
        assert!(debug_str.contains("John Doe"));
        assert!(!debug_str.contains("GOV123"));
    }
}
