#[derive(Debug, thiserror::Error)]
pub enum SubmitterNameError {
    #[error("Submitter name cannot be empty or whitespace.")]
    EmptyOrWhitespace,
}

#[derive(Debug, PartialEq, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns an instance of `SubmitterName` if the input is not blank.
    /// The name is kept exactly as submitted.
    pub fn parse(s: String) -> Result<SubmitterName, SubmitterNameError> {
        if s.trim().is_empty() {
            return Err(SubmitterNameError::EmptyOrWhitespace);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
