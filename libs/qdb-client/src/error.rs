/// Ошибки HTTP-клиента QuestDB.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection-level failure: DNS, refused connection, broken body read.
    #[error("transport: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expect from `/exec`.
    #[error("malformed response: {0}")]
    Malformed(String),
}
