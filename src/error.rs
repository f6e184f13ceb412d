use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("unsupported event: {0}")]
    UnsupportedEvent(String),
    #[error("branch name does not match {{username}}/{{ticket_num}}-{{ticket_name}}: {0}")]
    BranchPatternMismatch(String),
    #[error("no ticket found with ID {0}")]
    TicketNotFound(u64),
    #[error("failed to publish cross-link comment: {0}")]
    CommentPublishFailure(String),
    #[error("ticket tracker error: {0}")]
    TicketTracker(String),
    #[error("code host error: {0}")]
    CodeHost(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid event payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
