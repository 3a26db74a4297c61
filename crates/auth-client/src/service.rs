use std::time::Duration;

use serde::de::DeserializeOwned;
use shared_types::{AppError, AuthUser, ClientConfig, LoginRequest, LoginResponse};

/// The remote authentication service.
///
/// Futures are not required to be `Send`: in the browser they wrap JS
/// promises and run on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Check a stored token and return the user it belongs to.
    async fn verify_session(&self, token: &str) -> Result<AuthUser, AppError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    async fn logout(&self, token: &str) -> Result<(), AppError>;
}

/// `AuthService` over the Nurtura REST API.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    client: reqwest::Client,
    base_url: String,
    verify_timeout: Duration,
}

impl HttpAuthService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            verify_timeout: Duration::from_secs(config.auth.verify_timeout_secs),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl AuthService for HttpAuthService {
    async fn verify_session(&self, token: &str) -> Result<AuthUser, AppError> {
        let response = self
            .client
            .get(self.url("auth/session"))
            .bearer_auth(token)
            .timeout(self.verify_timeout)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = self
            .client
            .post(self.url("auth/login"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn logout(&self, token: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.url("auth/logout"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::timeout("The server took too long to respond")
    } else {
        AppError::network(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::internal(format!("Malformed response: {e}")))
}

async fn error_from_response(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response_body(&body).unwrap_or_else(|| {
        AppError::from_status(status.as_u16(), format!("Request failed with status {status}"))
    })
}
