use thiserror::Error;

pub type TagsmithResult<T> = Result<T, TagsmithError>;

#[derive(Error, Debug)]
pub enum TagsmithError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
