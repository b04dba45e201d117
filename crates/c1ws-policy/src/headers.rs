use std::collections::HashMap;

pub const API_SECRET_KEY: &str = "api-secret-key";
pub const API_VERSION: &str = "api-version";
pub const API_VERSION_V1: &str = "v1";
pub const JSON: &str = "application/json";

/// Headers sent on every call to the policy API.
pub fn auth_headers(api_key: &str) -> HashMap<String, String> {
    let mut h = HashMap::new();
    h.insert(API_SECRET_KEY.to_string(), api_key.to_string());
    h.insert(API_VERSION.to_string(), API_VERSION_V1.to_string());
    h.insert("Content-Type".to_string(), JSON.to_string());
    h.insert("Accept".to_string(), JSON.to_string());
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_four_fixed_headers() {
        let h = auth_headers("secret-123");
        assert_eq!(h.len(), 4);
        assert_eq!(h["api-secret-key"], "secret-123");
        assert_eq!(h["api-version"], "v1");
        assert_eq!(h["Content-Type"], "application/json");
        assert_eq!(h["Accept"], "application/json");
    }

    #[test]
    fn test_key_is_not_validated() {
        let h = auth_headers("");
        assert_eq!(h["api-secret-key"], "");
    }

    proptest! {
        #[test]
        fn prop_builder_is_pure(key in ".*") {
            let first = auth_headers(&key);
            let second = auth_headers(&key);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), 4);
            prop_assert_eq!(&first[API_SECRET_KEY], &key);
        }
    }
}
