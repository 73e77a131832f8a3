use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;
