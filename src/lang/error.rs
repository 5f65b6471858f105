use super::Position;

pub struct Error {
    code: ErrorCode,
    position: Option<Position>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_position($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_position($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            position: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn in_position(self, position: Position) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            position: Some(position),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    LexicalError,
    ParseError,
    RuntimeError,
    FileNotFound,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self {
            LexicalError => write!(f, "Lexical Error"),
            ParseError => write!(f, "Parse Error"),
            RuntimeError => write!(f, "Runtime Error"),
            FileNotFound => write!(f, "File Not Found"),
            InternalError => write!(f, "Internal Error"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(position) = self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
