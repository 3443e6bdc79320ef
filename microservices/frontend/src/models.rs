use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "frontend";
pub const WELCOME_MESSAGE: &str = "Welcome to K3s Microservices!";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WelcomeResponse {
    pub service: String,
    pub status: String,
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: "running".to_string(),
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
