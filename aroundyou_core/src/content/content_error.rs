use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentError {
    /// Location of the offending value, e.g. `features[2].title`
    pub path: String,
    pub message: String,
}

impl ContentError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn from_json(error: serde_json::Error) -> Self {
        Self::new(
            "$",
            format!(
                "Invalid content document at line {}, column {}: {}",
                error.line(),
                error.column(),
                error
            ),
        )
    }
}

impl Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ContentError {}
