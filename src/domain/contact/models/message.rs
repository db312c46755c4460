#[derive(Debug, thiserror::Error)]
pub enum ContactMessageError {
    #[error("Contact message cannot be empty or whitespace.")]
    EmptyOrWhitespace,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, ContactMessageError> {
        if s.trim().is_empty() {
            return Err(ContactMessageError::EmptyOrWhitespace);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
