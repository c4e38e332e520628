use super::*;

#[test]
fn registry_contains_builtin_languages() {
    let registry = LanguageRegistry::default();

    assert!(registry.get_by_extension("py").is_some());
    assert!(registry.get_by_extension("c").is_some());
    assert!(registry.get_by_extension("swift").is_some());
}

#[test]
fn registry_returns_none_for_unknown_extension() {
    let registry = LanguageRegistry::default();
    assert!(registry.get_by_extension("xyz").is_none());
}
