use gloo::net::http::Request;
use shared::{CreateHolidayRequest, Holiday};

/// API client for the remote holidays service
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the configured base URL.
    ///
    /// The URL is baked in at build time via `HOLIDAY_API_URL`; the
    /// fallback matches the service's default local port.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("HOLIDAY_API_URL")
                .unwrap_or("http://localhost:8080")
                .to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full holiday collection
    pub async fn get_holidays(&self) -> Result<Vec<Holiday>, String> {
        let url = format!("{}/api/holidays", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Holiday>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse holidays: {}", e)),
                    }
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", response.status(), error_text))
                }
            }
            Err(e) => Err(format!("Failed to fetch holidays: {}", e)),
        }
    }

    /// Create a new holiday and return the server-assigned record
    pub async fn create_holiday(&self, request: CreateHolidayRequest) -> Result<Holiday, String> {
        let url = format!("{}/api/holidays", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Holiday>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a holiday by its server-assigned id
    pub async fn delete_holiday(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/api/holidays/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", response.status(), error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
