use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::item::Item;

/// Content hash of a solve request.
///
/// Canonical encoding, fed to sha256 in order:
/// - `limit:<limit>\n`
/// - per item: `<byte length of label>:<label>:<amount>\n`
///
/// The length prefix keeps labels containing `:` or newlines unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputDigest(String);

impl InputDigest {
    pub fn from_request(items: &[Item], limit: i64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!("limit:{limit}\n").as_bytes());

        for item in items {
            let line = format!("{}:{}:{}\n", item.label.len(), item.label, item.amount);
            hasher.update(line.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        InputDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_depends_on_order_and_limit() {
        let a = Item::new("A", 10);
        let b = Item::new("B", 20);

        let ab = InputDigest::from_request(&[a.clone(), b.clone()], 25);
        let ba = InputDigest::from_request(&[b.clone(), a.clone()], 25);
        let ab_other_limit = InputDigest::from_request(&[a.clone(), b.clone()], 26);

        assert_ne!(ab, ba);
        assert_ne!(ab, ab_other_limit);
        assert_eq!(ab, InputDigest::from_request(&[a, b], 25));
        assert!(ab.as_str().starts_with("sha256:"));
        assert_eq!(ab.as_str().len(), "sha256:".len() + 64);
    }

    #[test]
    fn label_boundaries_are_unambiguous() {
        let joined = InputDigest::from_request(&[Item::new("a:1", 2)], 5);
        let split = InputDigest::from_request(&[Item::new("a", 1), Item::new("", 2)], 5);
        assert_ne!(joined, split);
    }
}
