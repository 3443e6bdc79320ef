use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;

pub const DATA_PATH: &str = "/api/data";

/// Fetch the backend's data payload as raw JSON.
///
/// The backend's status code is not inspected; any body that decodes as
/// JSON is returned unchanged.
pub async fn fetch_data(client: &HttpClient, backend_url: &str) -> Result<Value> {
    let url = format!("{}{}", backend_url, DATA_PATH);
    debug!("Fetching data from {}", url);

    let response = client.get(&url).send().await?;
    let body = response.json::<Value>().await?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn test_fetch_data_returns_body_unchanged() {
        let mock_server = MockServer::start().await;
        let payload = json!({
            "service": "backend",
            "data": { "users": 512, "requests": 4096, "status": "healthy" }
        });

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = fetch_data(&HttpClient::new(), &mock_server.uri()).await.unwrap();
        assert_eq!(body, payload);
    }

    #[actix_web::test]
    async fn test_fetch_data_non_json_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/data"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let result = fetch_data(&HttpClient::new(), &mock_server.uri()).await;
        assert!(result.is_err());
    }
}
