use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque customer identifier as it appears in the source system.
///
/// Integer ids sort before text ids; within a kind the natural order applies.
/// Text that round-trips exactly through `i64` is the same customer as the
/// integer, so every constructor and the JSON decoder canonicalize it to `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged, from = "WireCustomerId")]
pub enum CustomerId {
    Int(i64),
    Text(String),
}

impl CustomerId {
    /// Interpret a stored text key. Only text that round-trips exactly through
    /// an integer becomes `Int`, so ids like `"007"` keep their identity.
    pub fn from_db(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => CustomerId::Int(n),
            _ => CustomerId::Text(raw.to_string()),
        }
    }

    /// Canonical form of an id built directly from its variants
    pub fn canonical(self) -> Self {
        match self {
            CustomerId::Text(s) => CustomerId::from_db(&s),
            id => id,
        }
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Int(n) => write!(f, "{}", n),
            CustomerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        CustomerId::Int(value)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        CustomerId::from_db(value)
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        CustomerId::from_db(&value)
    }
}

/// JSON shape before canonicalization
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCustomerId {
    Int(i64),
    Text(String),
}

impl From<WireCustomerId> for CustomerId {
    fn from(value: WireCustomerId) -> Self {
        match value {
            WireCustomerId::Int(n) => CustomerId::Int(n),
            WireCustomerId::Text(s) => CustomerId::from_db(&s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_db_keeps_leading_zeros() {
        assert_eq!(CustomerId::from_db("42"), CustomerId::Int(42));
        assert_eq!(CustomerId::from_db("007"), CustomerId::Text("007".to_string()));
        assert_eq!(CustomerId::from_db("C-9"), CustomerId::Text("C-9".to_string()));
    }

    #[test]
    fn test_untagged_json() {
        let ids: Vec<CustomerId> = serde_json::from_str(r#"[17, "abc"]"#).unwrap();
        assert_eq!(ids, vec![CustomerId::Int(17), CustomerId::from("abc")]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[17,"abc"]"#);
    }

    #[test]
    fn test_numeric_text_is_the_integer_customer() {
        assert_eq!(CustomerId::from("42"), CustomerId::Int(42));
        assert_eq!(CustomerId::from("42".to_string()), CustomerId::Int(42));
        assert_eq!(CustomerId::Text("42".to_string()).canonical(), CustomerId::Int(42));
        assert_eq!(CustomerId::from("007"), CustomerId::Text("007".to_string()));

        let ids: Vec<CustomerId> = serde_json::from_str(r#"["42", 42, "007"]"#).unwrap();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], CustomerId::Text("007".to_string()));
    }

    #[test]
    fn test_json_rejects_non_id_values() {
        assert!(serde_json::from_str::<CustomerId>("4.5").is_err());
        assert!(serde_json::from_str::<CustomerId>("true").is_err());
    }

    #[test]
    fn test_ordering_ints_before_text() {
        let mut ids = vec![CustomerId::from("b"), CustomerId::Int(10), CustomerId::from("a"), CustomerId::Int(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![CustomerId::Int(2), CustomerId::Int(10), CustomerId::from("a"), CustomerId::from("b")]
        );
    }
}
