use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparseVectorError {
    #[error("Can't parse vector JSON: {0}")]
    Json(#[from] serde_json::Error),
}
