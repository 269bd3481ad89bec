pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("inventory JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate device id in inventory: {id}")]
    DuplicateDeviceId { id: String },

    #[error("connection {connection_id} references an unknown device: {device_id}")]
    DanglingConnection {
        connection_id: String,
        device_id: String,
    },

    #[error("connection {connection_id} connects device {device_id} to itself")]
    SelfLoop {
        connection_id: String,
        device_id: String,
    },

    #[error("invalid topology config: {message}")]
    InvalidConfig { message: String },
}
