//! Error type shared by the API clients.

use reqwest::Error as ReqwestError;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to the schedule backends.
pub enum ClientError {
    /// Transport failed, the server answered non-2xx, or the body could
    /// not be decoded.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The server reported `success: false` with this message.
    #[error("API error: {0}")]
    Api(String),
}
