use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Read of {wanted} bytes at position {position} exceeds buffer length {len}")]
    OutOfBounds {
        position: usize,
        wanted: usize,
        len: usize,
    },

    #[error("Value {value} does not fit in a two-byte varint")]
    VarIntOverflow { value: u32 },

    #[error("String payload of {len} bytes exceeds the one-byte length prefix")]
    PayloadTooLarge { len: usize },

    #[error("Invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("Invalid game record marker: expected 0x01, got {found:#04x}")]
    InvalidRecordMarker { found: u8 },

    #[error("Malformed ciphertext padding")]
    Padding,

    #[error("Save member not found: {name}")]
    MemberNotFound { name: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Malformed record at offset {offset}: {message}")]
    MalformedRecord { offset: usize, message: String },

    #[error("Song not found in catalog: {song_id}")]
    CatalogMiss { song_id: String },

    #[error("Account has no cloud save")]
    EmptySaveResponse,

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}
