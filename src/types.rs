use serde::{Deserialize, Deserializer};

/// Calendar dates are stored as `YYYY-MM-DD` text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Role assigned to users created without one.
pub const DEFAULT_USER_ROLE: &str = "intern";

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>`: an absent key stays `None`, `null` becomes `Some(None)`
/// and a value becomes `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        value: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_absent_from_null() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);

        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let set: Probe = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
        assert_eq!(set.value, Some(Some("x".to_string())));
    }
}
