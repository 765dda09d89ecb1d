//! Canonical brawler names and role types.
//!
//! The source files spell names inconsistently ("El Primo", "EL PRIMO ",
//! "el primo"), so every case-insensitive comparison goes through these
//! newtypes. Normalization happens once, at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

fn canonicalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case- and whitespace-insensitive key for a brawler name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BrawlerKey(String);

impl BrawlerKey {
    /// Build the canonical key for a raw brawler name.
    pub fn new(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrawlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BrawlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrawlerKey({})", self.0)
    }
}

impl From<&str> for BrawlerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BrawlerKey {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<BrawlerKey> for String {
    fn from(k: BrawlerKey) -> Self {
        k.0
    }
}

/// A brawler role ("tank", "sniper", "contrôle", ...), stored lowercased.
///
/// The vocabulary is open: whatever the type file contains is accepted.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BrawlerType(String);

impl BrawlerType {
    pub fn new(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for BrawlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BrawlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrawlerType({})", self.0)
    }
}

impl From<String> for BrawlerType {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for BrawlerType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<BrawlerType> for String {
    fn from(t: BrawlerType) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_case_and_padding() {
        assert_eq!(BrawlerKey::new("  El Primo "), BrawlerKey::new("EL PRIMO"));
        assert_eq!(BrawlerKey::new("Mr. P").as_str(), "mr. p");
    }

    #[test]
    fn test_key_keeps_inner_spacing() {
        assert_ne!(BrawlerKey::new("El Primo"), BrawlerKey::new("ElPrimo"));
    }

    #[test]
    fn test_type_normalized() {
        let t = BrawlerType::new("Tank");
        assert_eq!(t.as_str(), "tank");
        assert_eq!(t, BrawlerType::new(" TANK "));
        assert_ne!(t, BrawlerType::new("sniper"));
    }

    #[test]
    fn test_type_non_ascii() {
        let t = BrawlerType::new("Contrôle");
        assert_eq!(t.as_str(), "contrôle");
        assert_eq!(t, BrawlerType::from("CONTRÔLE"));
    }

    #[test]
    fn test_key_deserialize_normalizes() {
        let k: BrawlerKey = serde_json::from_str("\" El Primo \"").unwrap();
        assert_eq!(k, BrawlerKey::new("el primo"));
        assert_eq!(serde_json::to_string(&k).unwrap(), "\"el primo\"");
    }

    #[test]
    fn test_type_serde_roundtrip_normalizes() {
        let t: BrawlerType = serde_json::from_str("\"Anti-Tank\"").unwrap();
        assert_eq!(t.as_str(), "anti-tank");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"anti-tank\"");
    }
}
