use serde::Serialize;

/// Liveness payload; `storage` names the backend selected at startup.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub storage: &'static str,
}

/// Body shared by every failed request: `{ "error": "<message>" }`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for operations that only confirm success.
#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
