//! Error codes shared by every fallible operation in the crate.
//!
//! Each module owns its own `thiserror` enum. They all implement
//! [`ErrorCode`] so a caller can branch on the class of failure (show
//! "file missing" vs. "corrupt save" vs. "no permission") without matching
//! every variant of every module.

/// Coarse failure class. Every error in the crate maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Input rejected; state unchanged. Fix the input and retry.
    Validation,
    /// The target isn't a member of the collection it was looked up in.
    NotFound,
    /// A coordinate lies outside a grid or camera bound.
    OutOfBounds,
    /// Undo or redo with nothing on the stack.
    EmptyHistory,
    /// Scene file or its directory doesn't exist.
    FileNotFound,
    /// The OS refused access to the scene file.
    PermissionDenied,
    /// The scene file was read but isn't a valid scene document.
    Malformed,
    /// Any other I/O failure.
    Io,
}

impl ErrorClass {
    /// Grepable code for this class.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "E_VALIDATION",
            Self::NotFound => "E_NOT_FOUND",
            Self::OutOfBounds => "E_OUT_OF_BOUNDS",
            Self::EmptyHistory => "E_EMPTY_HISTORY",
            Self::FileNotFound => "E_FILE_NOT_FOUND",
            Self::PermissionDenied => "E_PERMISSION_DENIED",
            Self::Malformed => "E_MALFORMED_DOCUMENT",
            Self::Io => "E_IO",
        }
    }
}

/// Grepable error code and retryable flag for editor errors.
pub trait ErrorCode: std::fmt::Display {
    fn class(&self) -> ErrorClass;

    fn error_code(&self) -> &'static str {
        self.class().code()
    }

    /// Whether retrying the same call unchanged could succeed.
    fn retryable(&self) -> bool {
        matches!(self.class(), ErrorClass::Io)
    }
}
