use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialError {
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
    #[error("attribute `{attribute}` has invalid color value {value:?}")]
    InvalidColor { attribute: &'static str, value: String },
}
