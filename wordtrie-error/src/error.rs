//! The main Error type for wordtrie

use crate::ErrorKind;
use std::fmt;

/// The unified error type for all wordtrie operations.
///
/// Besides its [`ErrorKind`] and message, an error records the operation that
/// raised it, key-value context, and optionally the underlying cause.
///
/// # Example
///
/// ```rust
/// use wordtrie_error::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::InvalidInput, "expected a string, found number")
///     .with_operation("trie::add")
///     .with_context("found", "number");
///
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.operation(), "trie::add");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Shorthand for `Error::new(ErrorKind::InvalidInput, message)`
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Operation that raised the error, `""` if none was recorded
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Context pairs in the order they were added
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Underlying cause, for downcasting
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// Record the operation raising this error.
    ///
    /// An operation recorded earlier is kept as a `called` context entry, so
    /// the chain from inner to outer call survives.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        let inner = std::mem::replace(&mut self.operation, operation);
        if !inner.is_empty() {
            self.context.push(("called", inner.to_string()));
        }
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the underlying cause. Setting it twice is a bug (debug-asserted).
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

/// Single line: `Kind at op, context { k: v, .. } => message`
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, ", context {{ {}: {}", key, value)?;
            for (key, value) in pairs {
                write!(f, ", {}: {}", key, value)?;
            }
            f.write_str(" }")?;
        }

        match self.message.as_str() {
            "" => Ok(()),
            message => write!(f, " => {}", message),
        }
    }
}

/// Multi-line, one section per populated field
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }
        writeln!(f)?;

        if !self.message.is_empty() {
            write!(f, "\n    Message: {}\n", self.message)?;
        }

        if !self.context.is_empty() {
            f.write_str("\n    Context:\n")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        match &self.source {
            Some(source) => write!(f, "\n    Source: {:?}\n", source),
            None => Ok(()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}
