use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "backend";
pub const HEALTHY: &str = "healthy";

// Data models
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Metrics {
    pub users: u32,
    pub requests: u32,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DataResponse {
    pub service: String,
    pub data: Metrics,
}

impl DataResponse {
    pub fn new(data: Metrics) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
        }
    }
}
