/// A single user review, kept exactly as the review source returned it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review(String);

impl Review {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Text handed to the scorers: newlines collapsed to spaces, then trimmed
    pub fn normalized(&self) -> String {
        self.0.replace("\r\n", " ").replace(['\n', '\r'], " ").trim().to_string()
    }
}

impl From<String> for Review {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Review {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
