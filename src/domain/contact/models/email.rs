#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, EmailError> {
        if has_address_shape(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::InvalidAddress(format!(
                "{} is not a valid email",
                s
            )))
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a non-empty local part
/// and a domain holding a dot with at least one character on each side.
fn has_address_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => domain
            .char_indices()
            .skip(1)
            .any(|(i, c)| c == '.' && i + 1 < domain.len()),
        _ => false,
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Invalid email subject {0}")]
    InvalidSubject(String),
    #[error("Invalid email Html content: {0}")]
    InvalidHtmlContent(String),
    #[error("Invalid email text content: {0}")]
    InvalidTextContent(String),
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailMessage {
    subject: EmailSubject,
    html_content: EmailHtmlContent,
    text_content: EmailTextContent,
}

impl EmailMessage {
    pub fn new(
        subject: EmailSubject,
        html_content: EmailHtmlContent,
        text_content: EmailTextContent,
    ) -> Self {
        Self {
            subject,
            html_content,
            text_content,
        }
    }
    pub fn subject_as_ref(&self) -> &EmailSubject {
        &self.subject
    }
    pub fn html_as_ref(&self) -> &EmailHtmlContent {
        &self.html_content
    }
    pub fn text_as_ref(&self) -> &EmailTextContent {
        &self.text_content
    }
}

/// A message ready for dispatch. The sender address is owned by the
/// delivery client, only the display name travels with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub sender_name: String,
    pub recipients: Vec<EmailAddress>,
    pub message: EmailMessage,
}

impl OutgoingEmail {
    pub fn new(sender_name: &str, recipient: EmailAddress, message: EmailMessage) -> Self {
        Self {
            sender_name: sender_name.to_string(),
            recipients: vec![recipient],
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailSubject(String);

impl TryFrom<String> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidSubject(
                "EmailSubject cannot be empty.".into(),
            ))
        }
    }
}

impl TryFrom<&str> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EmailSubject::try_from(value.to_string())
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailHtmlContent(String);

impl TryFrom<String> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidHtmlContent(
                "EmailHtmlContent cannot be empty.".into(),
            ))
        }
    }
}

impl AsRef<str> for EmailHtmlContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailTextContent(String);

impl TryFrom<String> for EmailTextContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidTextContent(
                "EmailTextContent cannot be empty.".into(),
            ))
        }
    }
}

impl AsRef<str> for EmailTextContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
