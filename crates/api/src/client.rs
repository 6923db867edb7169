use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, ClientConfig};

/// Shared HTTP client. Cheap to clone; all clones share one connection
/// pool and, on native targets, one cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Extension trait providing `.into_app_error()` on transport failures.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        AppError::network(self.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: build_http(),
            config,
        }
    }

    /// Client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(crate::config::load())
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path), path, false).await?;
        decode(response, path).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        let response = self.send(req, path, false).await?;
        decode(response, path).await
    }

    /// POST to an endpoint whose 400/401 answers mean bad credentials.
    pub(crate) async fn post_credentials<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        let response = self.send(req, path, true).await?;
        decode(response, path).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PUT, path).json(body);
        let response = self.send(req, path, false).await?;
        decode(response, path).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, path), path, false)
            .await
            .map(|_| ())
    }

    async fn send(
        &self,
        req: RequestBuilder,
        path: &str,
        is_login: bool,
    ) -> Result<Response, AppError> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "Request failed");
            e.into_app_error()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(endpoint = path, status = status.as_u16(), "Request rejected");
        Err(AppError::from_response(status.as_u16(), &body, is_login))
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, AppError> {
    let bytes = response.bytes().await.map_err(|e| e.into_app_error())?;
    // Some endpoints answer with an empty body; treat it as JSON null so
    // `()` and `Option<_>` targets still decode.
    let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes[..] };
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(endpoint = path, error = %e, "Unexpected response body");
        AppError::network(format!("Unexpected response from {path}: {e}"))
    })
}
