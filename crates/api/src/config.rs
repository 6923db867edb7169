use shared_types::config::ClientConfig;

/// Resolve the client configuration for this build.
///
/// Native builds read `CLINIC_API_URL` at runtime, after loading an optional
/// `.env`. Browser builds have no process environment, so the value is
/// baked in at compile time.
pub fn load() -> ClientConfig {
    let config = ClientConfig::default().with_override(env_override().as_deref());
    tracing::info!(api_base_url = %config.api_base_url, "Resolved API base URL");
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn env_override() -> Option<String> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }
    std::env::var(shared_types::config::API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_override() -> Option<String> {
    option_env!("CLINIC_API_URL").map(str::to_string)
}
