//! Integration tests for fixed-duration expiration installed through the
//! component post-processing hook.

use std::sync::Arc;
use std::time::Duration;

use sessionkit_config::SessionkitConfig;
use sessionkit_session::{
    Component, ComponentPostProcessor, FixedDurationExpirationInstaller,
    InMemorySessionRepository, RepositoryConfig, Session, SessionRepository, apply_post_processors,
};

const THIRTY_MINUTES: Duration = Duration::from_secs(30 * 60);
const FIVE_MINUTES: Duration = Duration::from_secs(5 * 60);

#[tokio::test]
async fn test_thirty_minute_installer_overrides_five_minute_session() {
    let store = InMemorySessionRepository::default();
    let installer = FixedDurationExpirationInstaller::new(THIRTY_MINUTES);

    let repo = installer
        .process(Component::repository(store.clone()), "sessionRepository")
        .into_session_repository()
        .expect("repository capability lost");

    let session = Session::new().with_max_inactive_interval(FIVE_MINUTES);
    repo.save(&session).await.unwrap();

    let stored = store.get(session.id()).await.unwrap();
    assert_eq!(stored.max_inactive_interval(), THIRTY_MINUTES);
}

#[tokio::test]
async fn test_find_and_delete_through_wrapper_match_store() {
    let store = InMemorySessionRepository::default();
    let installer = FixedDurationExpirationInstaller::new(THIRTY_MINUTES);
    let repo = installer
        .process(Component::repository(store.clone()), "sessionRepository")
        .into_session_repository()
        .unwrap();

    let mut session = repo.create_session().await.unwrap();
    assert_eq!(session.max_inactive_interval(), THIRTY_MINUTES);
    session.set_attribute("user", serde_json::json!("alice"));
    repo.save(&session).await.unwrap();

    let via_wrapper = repo.find_by_id(session.id()).await.unwrap().unwrap();
    assert_eq!(via_wrapper.get_attribute("user"), Some(&serde_json::json!("alice")));
    assert!(repo.find_by_id("missing").await.unwrap().is_none());

    repo.delete_by_id(session.id()).await.unwrap();
    assert!(!store.contains(session.id()).await);
    assert!(repo.find_by_id(session.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_installer_from_toml_config() {
    let config = SessionkitConfig::from_toml(
        r#"
[session]
fixed_expiration_secs = 1800
default_max_inactive_secs = 60
max_sessions = 100
enable_cleanup_task = false
"#,
    )
    .unwrap();
    let session_config = config.session_or_default();

    let store = InMemorySessionRepository::new(RepositoryConfig::from(&session_config));
    assert!(store.spawn_cleanup_task().is_none());

    let processors: Vec<Arc<dyn ComponentPostProcessor>> =
        FixedDurationExpirationInstaller::from_config(&session_config)
            .into_iter()
            .map(|installer| Arc::new(installer) as Arc<dyn ComponentPostProcessor>)
            .collect();
    assert_eq!(processors.len(), 1);

    let settings = Component::other(session_config.clone());
    let untouched = apply_post_processors(&processors, settings.clone(), "settings");
    assert!(untouched.ptr_eq(&settings));

    let repo = apply_post_processors(
        &processors,
        Component::repository(store.clone()),
        "sessionRepository",
    )
    .into_session_repository()
    .unwrap();

    // The store's own default is 60s; the wrapper replaces it on create and save
    let session = repo.create_session().await.unwrap();
    repo.save(&session).await.unwrap();
    assert_eq!(
        store.get(session.id()).await.unwrap().max_inactive_interval(),
        THIRTY_MINUTES
    );
}

#[tokio::test]
async fn test_without_fixed_expiration_no_installer() {
    let config = SessionkitConfig::from_toml("[session]\nmax_sessions = 10\n").unwrap();
    let session_config = config.session_or_default();
    assert!(FixedDurationExpirationInstaller::from_config(&session_config).is_none());

    let store = InMemorySessionRepository::new(RepositoryConfig::from(&session_config));
    let session = Session::new().with_max_inactive_interval(FIVE_MINUTES);
    store.save(&session).await.unwrap();
    assert_eq!(
        store.get(session.id()).await.unwrap().max_inactive_interval(),
        FIVE_MINUTES
    );
}

#[tokio::test]
async fn test_zero_duration_sessions_expire_immediately() {
    let store = InMemorySessionRepository::default();
    let repo = FixedDurationExpirationInstaller::new(Duration::ZERO)
        .process(Component::repository(store.clone()), "sessionRepository")
        .into_session_repository()
        .unwrap();

    let session = Session::new();
    repo.save(&session).await.unwrap();

    assert!(repo.find_by_id(session.id()).await.unwrap().is_none());
    assert!(store.is_empty().await);
}
