//! Serde support for evaluation records (feature-gated)
//!
//! [`Outcomes<K>`] serializes as a map from label to outcome, in label
//! order.
//!
//! # Example
//!
//! ```rust,ignore
//! use keyed_validator::Outcomes;
//!
//! let outcomes: Outcomes<String> = [("age".to_string(), false)].into_iter().collect();
//! assert_eq!(serde_json::to_string(&outcomes).unwrap(), r#"{"age":false}"#);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::Hash;

use super::Outcomes;

impl<K> Serialize for Outcomes<K>
where
    K: Serialize + Hash + Eq,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.results.serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for Outcomes<K>
where
    K: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<K, bool>::deserialize(deserializer).map(|results| Outcomes { results })
    }
}
