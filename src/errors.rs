use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while loading or analysing subtitles
#[derive(Debug)]
pub enum SubwordError {
    Parse(ParseError),
    NotFound(NotFoundError),
    Collaborator(CollaboratorError),
    Io(io::Error),
}

/// Malformed or empty subtitle content, or a malformed listing line
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A word or phrase that does not occur in the analysed corpus
#[derive(Debug)]
pub struct NotFoundError {
    pub word: String,
}

impl NotFoundError {
    /// Create a new error for the given word.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Failure reported by an injected collaborator (chart renderer, metadata provider)
#[derive(Debug)]
pub struct CollaboratorError {
    pub collaborator: &'static str,
    pub message: String,
}

impl CollaboratorError {
    /// Create a new error attributed to `collaborator`.
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

impl fmt::Display for SubwordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubwordError::Io(err) => write!(f, "I/O error: {}", err),
            SubwordError::Parse(err) => write!(f, "Parse error: {}", err),
            SubwordError::NotFound(err) => write!(f, "Not found: {}", err),
            SubwordError::Collaborator(err) => write!(f, "Collaborator error: {}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' does not occur in the subtitle", self.word)
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.collaborator, self.message)
    }
}

impl Error for SubwordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubwordError::Io(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for ParseError {}
impl Error for NotFoundError {}
impl Error for CollaboratorError {}

// Conversion implementations
impl From<io::Error> for SubwordError {
    fn from(err: io::Error) -> Self {
        SubwordError::Io(err)
    }
}

impl From<ParseError> for SubwordError {
    fn from(err: ParseError) -> Self {
        SubwordError::Parse(err)
    }
}

impl From<NotFoundError> for SubwordError {
    fn from(err: NotFoundError) -> Self {
        SubwordError::NotFound(err)
    }
}

impl From<CollaboratorError> for SubwordError {
    fn from(err: CollaboratorError) -> Self {
        SubwordError::Collaborator(err)
    }
}

// Conversion to io::Error for callers that only speak io::Result
impl From<SubwordError> for io::Error {
    fn from(err: SubwordError) -> Self {
        match err {
            SubwordError::Io(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

// Type alias for Result with SubwordError
pub type SubwordResult<T> = Result<T, SubwordError>;
