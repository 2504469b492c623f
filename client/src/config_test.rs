use super::*;

#[test]
fn from_value_none_uses_fallback() {
    let config = PageConfig::from_value(None);
    assert_eq!(config.welcome, "A Monster Tamagotchi and Battle game for EOS blockchain!");
}

#[test]
fn from_value_empty_uses_fallback() {
    let config = PageConfig::from_value(Some(""));
    assert_eq!(config.welcome, PAGE_WELCOME_FALLBACK);
}

#[test]
fn from_value_keeps_configured_text_verbatim() {
    let config = PageConfig::from_value(Some("  <b>Welcome</b> tamers  "));
    assert_eq!(config.welcome, "  <b>Welcome</b> tamers  ");
}

#[test]
fn default_matches_unset_value() {
    assert_eq!(PageConfig::default(), PageConfig::from_value(None));
}
