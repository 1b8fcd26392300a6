use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Email delivery error: {0}")]
    Email(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("{0}")]
    Validation(String),
}

impl From<PortfolioError> for String {
    fn from(err: PortfolioError) -> Self {
        err.to_string()
    }
}

impl From<toml::de::Error> for PortfolioError {
    fn from(err: toml::de::Error) -> Self {
        PortfolioError::Content(err.to_string())
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Email(err.to_string())
    }
}
