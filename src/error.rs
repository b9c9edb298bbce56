//! Crate-level error types.

use std::fmt;

/// Errors produced by the preview3d crate.
///
/// The camera, input and stage logic is infallible; these cover options
/// loading and the DOM boundary.
#[derive(Debug)]
pub enum PreviewError {
    /// A DOM call failed or returned an unexpected node type.
    Dom(String),
    /// The file has no displayable media type.
    UnsupportedMedia(String),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::UnsupportedMedia(file) => {
                write!(f, "unsupported media type: {file}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for PreviewError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

#[cfg(feature = "web")]
impl From<PreviewError> for wasm_bindgen::JsValue {
    fn from(e: PreviewError) -> Self {
        Self::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PreviewError::UnsupportedMedia("notes.txt".into()).to_string(),
            "unsupported media type: notes.txt"
        );
        assert_eq!(
            PreviewError::Dom("no body".into()).to_string(),
            "DOM error: no body"
        );
    }

    #[test]
    fn io_has_source() {
        use std::error::Error;
        let err = PreviewError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(PreviewError::OptionsParse("x".into()).source().is_none());
    }
}
