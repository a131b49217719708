/// Errors surfaced by player operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// Client-supplied data violates a constraint (bad id, out-of-range field).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No stored player has the requested id.
    #[error("player {0} not found")]
    NotFound(i64),

    /// The store collaborator failed.
    #[error("player store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl PlayerError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
