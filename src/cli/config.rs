use crate::{config::CredentialStore, error, success, types::CredentialUpdate};

/// Persists the API key pair into the credential store.
///
/// Creates the config directory and a defaulted file when none exists yet;
/// the session key and token fields of an existing record are left
/// untouched.
pub async fn update_config(store: &CredentialStore, api_key: String, secret_key: String) {
    let update = CredentialUpdate {
        api_key: Some(api_key),
        secret_key: Some(secret_key),
        ..Default::default()
    };

    match store.update(update).await {
        Ok(_) => success!("Updated API credentials in {}", store.path().display()),
        Err(e) => error!("Failed to update config: {}", e),
    }
}
