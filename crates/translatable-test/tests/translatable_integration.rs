//! Integration tests for translatable attributes on the fixture `Post` model.
//!
//! Locale state is thread-local. Tests that depend on the default locale
//! reset it first, since a test runner may reuse threads between tests.

use translatable_core::i18n;
use translatable_db::model::Model;
use translatable_db::translatable::Translatable;
use translatable_db::value::Value;
use translatable_test::{override_locale, LocaleOverride, Post};

fn post_with_titles() -> Post {
    let mut post = Post::default();
    post.set_attribute("title_en", "Test en").unwrap();
    post.set_attribute("title_nl", "Test nl").unwrap();
    post
}

fn setup() {
    i18n::deactivate();
    i18n::reset_fallback_language();
}

// ── Attribute names ─────────────────────────────────────────────────────

#[test]
fn test_can_check_if_an_attribute_is_translatable() {
    let post = Post::default();
    assert!(post.is_translatable_attribute("title"));
    assert!(!post.is_translatable_attribute("non-translatable-field"));
}

#[test]
fn test_translatable_attributes_come_from_meta() {
    let post = Post::default();
    assert_eq!(
        post.translatable_attributes(),
        &["title", "field_with_accessor", "field_with_mutator"]
    );
    assert_eq!(Post::meta().db_table, "blog_post");
}

#[test]
fn test_can_get_a_translatable_attribute_name() {
    setup();
    let post = Post::default();
    i18n::activate("nl");
    assert_eq!(post.get_translatable_attribute_name("title", None), "title_nl");
    assert_eq!(
        post.get_translatable_attribute_name("title", Some("en")),
        "title_en"
    );
    i18n::deactivate();
}

// ── Non-translatable attributes ─────────────────────────────────────────

#[test]
fn test_wont_interfere_when_getting_non_translatable_attributes() {
    let mut post = Post::default();
    post.set_attribute("body", "Test").unwrap();
    assert_eq!(post.get_attribute("body"), Value::from("Test"));
}

#[test]
fn test_wont_interfere_when_setting_non_translatable_attributes() {
    setup();
    let mut post = Post::default();
    post.set_attribute("body", "Test").unwrap();
    assert_eq!(post.attributes().value("body"), Value::from("Test"));
    assert!(!post.attributes().contains("body_en"));
}

// ── Reading translations ────────────────────────────────────────────────

#[test]
fn test_can_get_a_translation() {
    let post = post_with_titles();
    assert_eq!(
        post.get_translation("title", Some("nl"), false),
        Value::from("Test nl")
    );
    assert_eq!(
        post.get_translation("title", Some("en"), false),
        Value::from("Test en")
    );
    assert_eq!(post.get_translation("title", Some("fr"), false), Value::Null);
}

#[test]
fn test_can_get_a_translation_using_a_fallback() {
    setup();
    let post = post_with_titles();
    assert_eq!(
        post.get_translation("title", Some("nl"), true),
        Value::from("Test nl")
    );
    assert_eq!(
        post.get_translation("title", Some("en"), true),
        Value::from("Test en")
    );
    assert_eq!(
        post.get_translation("title", Some("fr"), true),
        Value::from("Test en")
    );
}

#[test]
fn test_can_get_a_translation_with_a_fallback() {
    setup();
    let post = post_with_titles();
    assert_eq!(
        post.get_translation_with_fallback("title", Some("nl")),
        Value::from("Test nl")
    );
    assert_eq!(
        post.get_translation_with_fallback("title", Some("en")),
        Value::from("Test en")
    );
    assert_eq!(
        post.get_translation_with_fallback("title", Some("fr")),
        Value::from("Test en")
    );
}

#[test]
fn test_can_get_a_translation_without_a_fallback() {
    setup();
    let post = post_with_titles();
    assert_eq!(
        post.get_translation_without_fallback("title", Some("nl")),
        Value::from("Test nl")
    );
    assert_eq!(
        post.get_translation_without_fallback("title", Some("en")),
        Value::from("Test en")
    );
    assert_eq!(
        post.get_translation_without_fallback("title", Some("fr")),
        Value::Null
    );
}

#[test]
fn test_fallback_replaces_null_translation() {
    setup();
    let mut post = Post::default();
    post.set_attribute("title_en", "Test en").unwrap();
    post.set_attribute("title_nl", Value::Null).unwrap();

    assert_eq!(
        post.get_translation("title", Some("nl"), true),
        Value::from("Test en")
    );
    assert_eq!(
        post.get_translation("title", Some("en"), true),
        Value::from("Test en")
    );
    assert_eq!(
        post.get_translation("title", Some("fr"), true),
        Value::from("Test en")
    );
}

#[test]
fn test_fallback_follows_configured_fallback_locale() {
    let post = post_with_titles();
    override_locale(LocaleOverride::new().fallback(Some("nl")), || {
        assert_eq!(
            post.get_translation_with_fallback("title", Some("fr")),
            Value::from("Test nl")
        );
    });
}

#[test]
fn test_can_get_a_translation_using_the_logical_attribute() {
    setup();
    let post = post_with_titles();

    i18n::activate("nl");
    assert_eq!(post.get_attribute("title"), Value::from("Test nl"));

    i18n::activate("en");
    assert_eq!(post.get_attribute("title"), Value::from("Test en"));

    i18n::activate("fr");
    assert_eq!(post.get_attribute("title"), Value::Null);

    i18n::deactivate();
}

#[test]
fn test_can_get_a_translation_using_an_accessor() {
    let mut post = Post::default();
    post.set_attribute("field_with_accessor_en", "Test en").unwrap();

    override_locale(LocaleOverride::new().language("en"), || {
        assert_eq!(post.get_attribute("field_with_accessor"), Value::from("test en"));
    });
    // The physical column is untouched by the logical accessor.
    assert_eq!(
        post.get_attribute("field_with_accessor_en"),
        Value::from("Test en")
    );
}

#[test]
fn test_get_translations_lists_known_locales() {
    setup();
    let post = post_with_titles();
    let translations = post.get_translations("title");
    assert_eq!(translations.get("en"), Some(&Value::from("Test en")));
    assert!(!translations.contains_key("fr"));
}

// ── Writing translations ────────────────────────────────────────────────

#[test]
fn test_can_set_a_translatable_attribute_using_a_method() {
    let mut post = Post::default();
    post.set_translation("title", "nl", "Test nl")
        .unwrap()
        .set_translation("title", "en", "Test en")
        .unwrap();

    assert_eq!(post.get_attribute("title_nl"), Value::from("Test nl"));
    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_can_set_a_translatable_attribute_using_the_logical_attribute() {
    setup();
    let mut post = Post::default();
    post.set_attribute("title", "Test en").unwrap();

    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_logical_write_follows_active_locale() {
    let mut post = Post::default();
    override_locale(LocaleOverride::new().language("nl"), || {
        post.set_attribute("title", "Test nl").unwrap();
    });
    assert_eq!(post.attributes().value("title_nl"), Value::from("Test nl"));
    assert!(!post.attributes().contains("title_en"));
}

#[test]
fn test_can_set_a_translated_attribute_directly() {
    let post = post_with_titles();
    assert_eq!(post.get_attribute("title_nl"), Value::from("Test nl"));
    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_can_set_a_translatable_attribute_using_a_mutator() {
    let mut post = Post::default();
    post.set_translation("field_with_mutator", "nl", "Test nl")
        .unwrap();

    assert_eq!(
        post.get_attribute("field_with_mutator_nl"),
        Value::from("TEST NL")
    );
}

#[test]
fn test_can_set_a_translatable_attribute_using_make() {
    setup();
    let post = Post::make([("title", "Test en")]).unwrap();

    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_can_set_multiple_translatable_attributes_using_a_method() {
    let mut post = Post::default();
    post.set_translations("title", [("nl", "Test nl"), ("en", "Test en")])
        .unwrap();

    assert_eq!(post.get_attribute("title_nl"), Value::from("Test nl"));
    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_can_set_multiple_translatable_attributes_using_make() {
    let post = Post::make([(
        "title",
        Value::map([("nl", "Test nl"), ("en", "Test en")]),
    )])
    .unwrap();

    assert_eq!(post.get_attribute("title_nl"), Value::from("Test nl"));
    assert_eq!(post.get_attribute("title_en"), Value::from("Test en"));
}

#[test]
fn test_can_set_multiple_translatable_attributes_from_json() {
    let mut post = Post::default();
    post.fill_json(serde_json::json!({
        "title": {"nl": "Test nl", "en": "Test en"},
        "field_with_mutator": {"nl": "luid"},
        "body": "Body",
    }))
    .unwrap();

    assert_eq!(post.get_attribute("title_nl"), Value::from("Test nl"));
    assert_eq!(post.get_attribute("field_with_mutator_nl"), Value::from("LUID"));
    assert_eq!(post.get_attribute("body"), Value::from("Body"));
}

#[test]
fn test_can_set_multiple_translatable_attributes_from_a_json_value() {
    let mut post = Post::default();
    post.set_attribute("title", serde_json::json!({"en": "Hi", "nl": "Hoi"}))
        .unwrap();

    assert_eq!(post.get_attribute("title_en"), Value::from("Hi"));
    assert_eq!(post.get_attribute("title_nl"), Value::from("Hoi"));
}

#[test]
fn test_invalid_locale_in_mapping_writes_nothing() {
    let mut post = Post::default();
    let err = post
        .set_attribute("title", Value::map([("en", "ok"), ("e n", "bad")]))
        .unwrap_err();
    assert!(err.is_locale_error());
    assert!(post.attributes().is_empty());
}

#[test]
fn test_hydrated_columns_read_through_logical_attribute() {
    let post = Post::hydrate([("title_nl", "Opgeslagen"), ("title_en", "Stored")]);
    override_locale(LocaleOverride::new().language("nl"), || {
        assert_eq!(post.get_attribute("title"), Value::from("Opgeslagen"));
    });
}
