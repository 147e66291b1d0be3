use super::*;

// =============================================================
// decode
// =============================================================

#[test]
fn decode_accepts_current_format() {
    assert_eq!(ThemePreference::decode("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::decode("light"), Some(ThemePreference::Light));
}

#[test]
fn decode_accepts_legacy_boolean_strings() {
    assert_eq!(ThemePreference::decode("true"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::decode("false"), Some(ThemePreference::Light));
}

#[test]
fn decode_accepts_json_booleans_with_whitespace() {
    assert_eq!(ThemePreference::decode(" true "), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::decode("\nfalse"), Some(ThemePreference::Light));
}

#[test]
fn decode_rejects_malformed_values() {
    for raw in ["", "Dark", "DARK", "1", "0", "null", "\"dark\"", "yes", "{}"] {
        assert_eq!(ThemePreference::decode(raw), None, "raw={raw:?}");
    }
}

// =============================================================
// encoding
// =============================================================

#[test]
fn as_str_matches_storage_format() {
    assert_eq!(ThemePreference::Dark.as_str(), "dark");
    assert_eq!(ThemePreference::Light.as_str(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

#[test]
fn from_dark_and_is_dark_agree() {
    assert_eq!(ThemePreference::from_dark(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_dark(false), ThemePreference::Light);
    assert!(ThemePreference::Dark.is_dark());
    assert!(!ThemePreference::Light.is_dark());
}

#[test]
fn legacy_values_are_not_current_encoding() {
    assert!(ThemePreference::Dark.is_current_encoding("dark"));
    assert!(!ThemePreference::Dark.is_current_encoding("true"));
    assert!(!ThemePreference::Light.is_current_encoding(" false"));
}

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn deserializes_lowercase_names() {
    let dark: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(dark, ThemePreference::Dark);
    let back: ThemePreference = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(back, ThemePreference::Light);
}
