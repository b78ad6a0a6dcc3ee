use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range(index: usize, size: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, size }.into())
    }

    pub fn invalid_range(from: usize, to: usize) -> Error {
        Error(ErrorKind::InvalidRange { from, to }.into())
    }

    pub fn unsupported(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnsupportedOperation { name: name.into() }.into())
    }

    pub fn no_such_element() -> Error {
        Error(ErrorKind::NoSuchElement.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }

    pub fn duplicate_key(key: impl std::fmt::Debug) -> Error {
        Error(
            ErrorKind::DuplicateKey {
                key: format!("{key:?}"),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised by a read-only decorator.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedOperation { .. })
    }

    /// Returns `true` if this error is a positional bounds violation.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("invalid range: from ({from}) > to ({to})")]
    InvalidRange { from: usize, to: usize },

    #[error("unsupported operation {name} on an unmodifiable collection")]
    UnsupportedOperation { name: String },

    #[error("no such element")]
    NoSuchElement,

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid operation {name}")]
    InvalidOperation { name: String },

    #[error("duplicate key {key}")]
    DuplicateKey { key: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_index_out_of_range() {
        let err = Error::index_out_of_range(7, 3);
        assert_eq!(err.to_string(), "index 7 out of range for size 3");
        assert!(err.is_index_out_of_range());
    }

    #[test]
    fn duplicate_key_uses_debug_rendering() {
        let err = Error::duplicate_key("a");
        match err.into_kind() {
            ErrorKind::DuplicateKey { key } => assert_eq!(key, "\"a\""),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unsupported_names_entry_point() {
        let err = Error::unsupported("append");
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("append"));
    }
}
