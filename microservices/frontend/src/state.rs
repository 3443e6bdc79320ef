use reqwest::Client as HttpClient;

use crate::errors::{FrontendError, Result};

// App state
pub struct AppState {
    pub backend_url: String,
    pub http_client: HttpClient,
}

impl AppState {
    pub fn new(backend_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(format!("k3s-frontend/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FrontendError::Http)?;

        Ok(Self {
            backend_url: backend_url.into(),
            http_client,
        })
    }
}
