use qdb_client::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum RetainError {
    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export failed for {failed} of {total} partitions")]
    ExportIncomplete { failed: usize, total: usize },
}
