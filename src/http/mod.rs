mod client;
mod response;

pub use client::HeaderMap;
pub use client::HttpClient;
pub use client::DEFAULT_TIMEOUT;
pub use response::ApiResponse;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request to {url} failed")]
    RequestError {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },
}
