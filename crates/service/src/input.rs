//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        fin: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p.fin, None);
        let p: Patch = serde_json::from_str(r#"{"fin": null}"#).unwrap();
        assert_eq!(p.fin, Some(None));
        let p: Patch = serde_json::from_str(r#"{"fin": "2030-01-01"}"#).unwrap();
        assert_eq!(p.fin, Some(Some("2030-01-01".to_string())));
    }
}
