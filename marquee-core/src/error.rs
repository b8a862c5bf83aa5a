/// Message shown for transport failures and upstream errors without a body.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to connect to the server.";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("API key is missing. Cannot proceed with the request.")]
    MissingApiKey,

    #[error("Failed to connect to the server.")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("{message}")]
    Upstream { message: String },

    #[error("unexpected response body from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid resource URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
