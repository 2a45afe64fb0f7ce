use scroblcli::{
    config::CredentialStore,
    error::Error,
    types::{CredentialUpdate, Credentials},
};
use tempfile::tempdir;

fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
    CredentialStore::with_path(dir.path().join("scroblcli/config.json"))
}

#[tokio::test]
async fn test_update_creates_directory_and_defaulted_file() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    let persisted = store
        .update(CredentialUpdate {
            api_key: Some("K1".to_string()),
            secret_key: Some("S1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(persisted.api_key, "K1");
    assert_eq!(persisted.secret_key, "S1");
    assert_eq!(persisted.session_key, "");
    assert_eq!(persisted.api_token, "");
}

#[tokio::test]
async fn test_credentials_round_trip() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store
        .update(CredentialUpdate {
            api_key: Some("K".to_string()),
            secret_key: Some("S".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(
        loaded,
        Credentials {
            api_key: "K".to_string(),
            secret_key: "S".to_string(),
            session_key: String::new(),
            api_token: String::new(),
        }
    );
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_untouched() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store
        .update(CredentialUpdate {
            api_key: Some("K".to_string()),
            secret_key: Some("S".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // Only session_key is set; the key pair must survive the rewrite
    store
        .update(CredentialUpdate {
            session_key: Some("SESSION".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.api_key, "K");
    assert_eq!(loaded.secret_key, "S");
    assert_eq!(loaded.session_key, "SESSION");
    assert_eq!(loaded.api_token, "");
}

#[tokio::test]
async fn test_load_missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    match store.load().await {
        Err(Error::ConfigRead(_)) => {}
        other => panic!("expected ConfigRead error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_load_corrupt_json_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = CredentialStore::with_path(path);
    match store.load().await {
        Err(Error::ConfigRead(_)) => {}
        other => panic!("expected ConfigRead error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_missing_fields_in_file_default_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_key": "K"}"#).unwrap();

    let store = CredentialStore::with_path(path);
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded.api_key, "K");
    assert_eq!(loaded.secret_key, "");
    assert_eq!(loaded.session_key, "");
}
