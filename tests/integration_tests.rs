//! Integration tests for the translation facade
//!
//! These tests run real provider adapters against mocked HTTP endpoints and
//! verify validation, code rewriting and fallback across module boundaries.

use wiremock::{
    matchers::{body_partial_json, body_string_contains, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use multi_translate::translators::{
    BingTranslator, DeepLTranslator, GoogleTranslator, GoogleV2Translator, ReversoTranslator,
};
use multi_translate::{FallbackTranslator, LanguageInput, TranslateError, Translator};

// ==================== Test Helpers ====================

fn google_body(translation: &str) -> serde_json::Value {
    serde_json::json!([[[translation, "source text", null, null, 1]], null, "en"])
}

async fn mount_google(server: &MockServer, status: u16, translation: &str) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(google_body(translation))
    } else {
        ResponseTemplate::new(status).set_body_string("Internal Server Error")
    };

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn google_at(server: &MockServer) -> Box<dyn Translator> {
    Box::new(GoogleTranslator::with_endpoint(
        reqwest::Client::new(),
        format!("{}/translate_a/single", server.uri()),
    ))
}

// ==================== Single Provider Tests ====================

#[tokio::test]
async fn test_google_translate_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "Hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_body("Bonjour le monde")))
        .expect(1)
        .mount(&server)
        .await;

    let translator = google_at(&server);
    let french = translator.get_language("Fren");
    assert_eq!(french.code(), "fr");
    assert_eq!(french.similarity, 0.67);

    let result = translator
        .translate("Hello world", french.language.into(), LanguageInput::auto())
        .await
        .expect("Should succeed");

    assert_eq!(result.translator, "Google");
    assert_eq!(result.translation, "Bonjour le monde");
    assert_eq!(result.destination_language, LanguageInput::from(french.language));
    assert_eq!(result.source_language, LanguageInput::auto());
}

#[tokio::test]
async fn test_reverso_receives_rewritten_codes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/v1/translation"))
        .and(body_partial_json(serde_json::json!({"from": "eng", "to": "ger"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translation": ["Hallo"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let translator = ReversoTranslator::with_endpoint(
        reqwest::Client::new(),
        format!("{}/translate/v1/translation", server.uri()),
    );

    let result = translator
        .translate("Hello", LanguageInput::from("de"), LanguageInput::from("en"))
        .await
        .expect("Should succeed");

    assert_eq!(result.translation, "Hallo");
    assert_eq!(result.destination_language, LanguageInput::from("de"));
}

#[tokio::test]
async fn test_unsupported_language_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let translator = DeepLTranslator::with_endpoint(
        reqwest::Client::new(),
        format!("{}/jsonrpc", server.uri()),
    );

    let err = translator
        .translate("Hello", LanguageInput::from("ka"), LanguageInput::auto())
        .await
        .unwrap_err();

    assert!(err.is_unknown_language());
    assert!(matches!(err, TranslateError::UnsupportedLanguage { translator: "DeepL", .. }));
}

#[tokio::test]
async fn test_provider_error_is_translation_error() {
    let server = MockServer::start().await;
    mount_google(&server, 500, "").await;

    let err = google_at(&server)
        .translate("Hello", LanguageInput::from("fr"), LanguageInput::auto())
        .await
        .unwrap_err();

    assert!(err.is_translation_error());
    assert!(err.to_string().contains("500"));
}

// ==================== Fallback Tests ====================

#[tokio::test]
async fn test_fallback_recovers_from_failing_provider() {
    let failing = MockServer::start().await;
    mount_google(&failing, 500, "").await;

    let working = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ttranslatev3"))
        .and(body_string_contains("to=zh-Hans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"translations": [{"text": "你好", "to": "zh-Hans"}]}
        ])))
        .expect(1)
        .mount(&working)
        .await;

    let chain = FallbackTranslator::new(vec![
        google_at(&failing),
        Box::new(BingTranslator::with_endpoint(
            reqwest::Client::new(),
            format!("{}/ttranslatev3", working.uri()),
        )),
    ]);

    let result = chain
        .translate("Hello", LanguageInput::from("zh-CN"), LanguageInput::auto())
        .await
        .expect("Should succeed");

    assert_eq!(result.translator, "Fallback");
    assert_eq!(result.translation, "你好");
    assert_eq!(result.destination_language, LanguageInput::from("zh-CN"));

    let metrics = chain.metrics();
    assert_eq!(metrics.attempts, 2);
    assert_eq!(metrics.failures, 1);
    assert_eq!(metrics.fallbacks, 1);
}

#[tokio::test]
async fn test_fallback_skips_provider_without_language() {
    let reverso = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&reverso)
        .await;

    let google = MockServer::start().await;
    mount_google(&google, 200, "გამარჯობა").await;

    let chain = FallbackTranslator::new(vec![
        Box::new(ReversoTranslator::with_endpoint(
            reqwest::Client::new(),
            format!("{}/translate/v1/translation", reverso.uri()),
        )),
        google_at(&google),
    ]);

    let result = chain
        .translate("Hello", LanguageInput::from("ka"), LanguageInput::auto())
        .await
        .expect("Should succeed");

    assert_eq!(result.translation, "გამარჯობა");
}

#[tokio::test]
async fn test_fallback_exhausted_reports_every_provider() {
    let google = MockServer::start().await;
    mount_google(&google, 503, "").await;

    let google_v2 = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/t"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&google_v2)
        .await;

    let chain = FallbackTranslator::new(vec![
        google_at(&google),
        Box::new(GoogleV2Translator::with_endpoint(
            reqwest::Client::new(),
            format!("{}/translate_a/t", google_v2.uri()),
        )),
    ]);

    let err = chain
        .translate("Hello", LanguageInput::from("fr"), LanguageInput::auto())
        .await
        .unwrap_err();

    assert!(err.is_translation_error());
    let message = err.to_string();
    assert!(message.contains("Google: "));
    assert!(message.contains("GoogleV2: "));
    assert!(message.contains("429"));

    match err {
        TranslateError::Exhausted(failures) => assert_eq!(failures.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(chain.metrics().exhaustions, 1);
}

#[tokio::test]
async fn test_fallback_unknown_language_fails_fast() {
    let google = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&google)
        .await;

    let chain = FallbackTranslator::new(vec![google_at(&google)]);
    let err = chain
        .translate("Hello", LanguageInput::from("xx-invalid"), LanguageInput::auto())
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::UnknownLanguage(ref code) if code == "xx-invalid"));
    assert_eq!(chain.metrics().attempts, 0);
}
