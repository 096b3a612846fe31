//! Error types for bookmarks-server

use thiserror::Error;

use crate::db::DbError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the server from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}
