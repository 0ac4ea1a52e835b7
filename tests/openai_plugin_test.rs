//! Plugin lifecycle tests: registration, catalog fallback and misuse panics.

use hargow::LlmError;
use hargow::openai::{self, API_KEY_ENV, OpenAiConfig, OpenAiPlugin, models};
use hargow::registry::{ModelCapabilities, Registry};

fn initialized_plugin() -> (OpenAiPlugin, Registry) {
    let mut registry = Registry::new();
    let plugin = OpenAiPlugin::new(OpenAiConfig::new().with_api_key("test-key"));
    plugin.init(&mut registry).expect("init");
    (plugin, registry)
}

#[test]
fn test_init_registers_known_models_and_embedders() {
    let (_, registry) = initialized_plugin();

    for name in [models::GPT_4O, models::GPT_4O_MINI, models::GPT_4_TURBO, models::GPT_4] {
        assert!(openai::is_defined_model(&registry, name), "{name} missing");
    }
    for name in models::KNOWN_EMBEDDERS {
        assert!(openai::is_defined_embedder(&registry, name), "{name} missing");
    }

    assert!(!openai::is_defined_model(&registry, "gpt-3.5-turbo"));
    assert!(openai::model(&registry, "gpt-3.5-turbo").is_none());
}

#[test]
fn test_registered_models_carry_label_and_capabilities() {
    let (_, registry) = initialized_plugin();

    let gpt_4o = openai::model(&registry, models::GPT_4O).unwrap();
    assert_eq!(gpt_4o.name(), "gpt-4o");
    assert_eq!(gpt_4o.info().label, "OpenAI - gpt-4o");
    assert!(gpt_4o.info().supports.media);
    assert!(gpt_4o.info().supports.tools);

    let gpt_4 = openai::model(&registry, models::GPT_4).unwrap();
    assert!(!gpt_4.info().supports.media);
    assert!(gpt_4.info().supports.multiturn);
}

#[test]
#[should_panic(expected = "already initialized")]
fn test_double_init_panics() {
    let (plugin, mut registry) = initialized_plugin();
    let _ = plugin.init(&mut registry);
}

#[test]
#[should_panic(expected = "init not called")]
fn test_define_model_before_init_panics() {
    let plugin = OpenAiPlugin::new(OpenAiConfig::new().with_api_key("test-key"));
    let mut registry = Registry::new();
    let _ = plugin.define_model(&mut registry, models::GPT_4O, None);
}

#[test]
#[should_panic(expected = "init not called")]
fn test_define_embedder_before_init_panics() {
    let plugin = OpenAiPlugin::new(OpenAiConfig::new().with_api_key("test-key"));
    let mut registry = Registry::new();
    let _ = plugin.define_embedder(&mut registry, models::TEXT_EMBEDDING_3_SMALL);
}

#[test]
fn test_define_model_falls_back_to_catalog() {
    let (plugin, mut registry) = initialized_plugin();

    let model = plugin
        .define_model(&mut registry, models::GPT_4O_MINI, None)
        .unwrap();
    assert_eq!(model.info().label, "OpenAI - gpt-4o-mini");
    assert!(model.info().supports.media);
}

#[test]
fn test_define_model_unknown_name_without_capabilities_fails() {
    let (plugin, mut registry) = initialized_plugin();

    let err = plugin
        .define_model(&mut registry, "gpt-9-preview", None)
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidInput(_)));
    assert!(err.to_string().contains("gpt-9-preview"));
    assert!(!openai::is_defined_model(&registry, "gpt-9-preview"));
}

#[test]
fn test_define_model_with_explicit_capabilities() {
    let (plugin, mut registry) = initialized_plugin();

    let capabilities = ModelCapabilities {
        multiturn: true,
        tools: false,
        system_role: true,
        media: false,
    };
    let model = plugin
        .define_model(&mut registry, "gpt-9-preview", Some(capabilities))
        .unwrap();

    assert_eq!(model.info().label, "OpenAI - gpt-9-preview");
    assert!(!model.info().supports.tools);
    assert!(openai::is_defined_model(&registry, "gpt-9-preview"));
}

#[test]
fn test_define_embedder_registers_handle() {
    let (plugin, mut registry) = initialized_plugin();

    let embedder = plugin
        .define_embedder(&mut registry, "text-embedding-custom")
        .unwrap();
    assert_eq!(embedder.name(), "text-embedding-custom");
    assert!(openai::is_defined_embedder(&registry, "text-embedding-custom"));
}

#[test]
fn test_init_without_api_key_is_a_configuration_error() {
    // Only meaningful in an environment without the real key.
    if std::env::var(API_KEY_ENV).is_ok() {
        return;
    }

    let mut registry = Registry::new();
    let plugin = OpenAiPlugin::new(OpenAiConfig::new());
    let err = plugin.init(&mut registry).unwrap_err();

    assert!(matches!(err, LlmError::ConfigurationError(_)));
    assert!(err.to_string().contains(API_KEY_ENV));
    assert!(err.to_string().contains("platform.openai.com"));
    assert!(!openai::is_defined_model(&registry, models::GPT_4O));
}
