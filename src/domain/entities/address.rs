//! EVM account address value object.

use std::fmt;

/// Validated EVM account address, stored lowercased.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
}

impl Address {
    const HEX_LEN: usize = 40;

    /// Creates new address with format validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_ascii_lowercase();

        let hex = value.strip_prefix("0x")?;
        if hex.len() != Self::HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        Some(Self { value })
    }

    /// Creates address without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns address as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns shortened address for logs and compact display.
    #[must_use]
    pub fn short(&self) -> String {
        if self.value.len() <= 10 {
            return self.value.clone();
        }

        let prefix = &self.value[..6];
        let suffix = &self.value[self.value.len() - 4..];
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address").field("value", &self.value).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_valid_address() -> String {
        "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string()
    }

    #[test]
    fn test_valid_address_creation() {
        let address = Address::new(make_valid_address());
        assert!(address.is_some());
    }

    #[test]
    fn test_address_is_lowercased() {
        let address = Address::new(make_valid_address()).unwrap();
        assert_eq!(address.as_str(), &make_valid_address().to_lowercase());
    }

    #[test]
    fn test_invalid_address_no_prefix() {
        let address = Address::new("71C7656EC7ab88b098defB751B7401B5f6d8976F");
        assert!(address.is_none());
    }

    #[test]
    fn test_invalid_address_wrong_length() {
        let address = Address::new("0x71C7656E");
        assert!(address.is_none());
    }

    #[test]
    fn test_invalid_address_non_hex() {
        let address = Address::new(format!("0x{}", "g".repeat(40)));
        assert!(address.is_none());
    }

    #[test]
    fn test_short_display() {
        let address = Address::new(make_valid_address()).unwrap();
        let short = address.short();

        assert!(short.starts_with("0x71c7"));
        assert!(short.ends_with("976f"));
        assert!(short.contains("..."));
    }
}
