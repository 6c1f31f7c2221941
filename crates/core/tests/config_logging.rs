use stache_api::{Record, TypeShape, Value, Visibility};
use stache_core::logging::init_logging;
use stache_core::{AccessorCache, LogConfig, ResolverConfig, ScopeResolver, StacheError};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("resolver.json");
    std::fs::write(&path, r#"{"root_type": "Entity", "log": {"level": "debug"}}"#).unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    assert_eq!(config.root_type, "Entity");
    assert_eq!(config.log.level, "debug");

    // The configured root bounds the supertype walk
    let entity = TypeShape::builder("Entity").field("id", Visibility::Public).build();
    let user = TypeShape::builder("User")
        .extends(entity)
        .field("email", Visibility::Public)
        .build();
    let stack = vec![Value::object(
        Record::new(user)
            .with_field("id", 1i64)
            .with_field("email", "a@b.c"),
    )];

    let resolver = ScopeResolver::from_config(&config);
    assert_eq!(resolver.value("email", &stack).unwrap(), Value::str("a@b.c"));
    assert_eq!(resolver.find("id", &stack).unwrap(), None);

    let default = ScopeResolver::new(Arc::new(AccessorCache::new()));
    assert_eq!(default.value("id", &stack).unwrap(), Value::Int(1));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let err = ResolverConfig::load(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StacheError::Io(_)));
}

#[test]
fn test_init_logging_once() {
    let temp = TempDir::new().unwrap();
    let config = LogConfig {
        level: "debug".to_string(),
        directory: Some(temp.path().join("logs")),
        to_stderr: false,
    };

    let guard = init_logging("resolver", &config).unwrap();
    assert!(guard.is_some());
    assert!(temp.path().join("logs").is_dir());

    tracing::info!("logging initialized");
    assert!(matches!(
        init_logging("resolver", &config),
        Err(StacheError::Config(_))
    ));
}
