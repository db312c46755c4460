use super::email::EmailAddress;

/// Who the site belongs to. Drives the notification recipient and the
/// wording of the acknowledgment.
#[derive(Debug, Clone)]
pub struct OwnerProfile {
    pub email: EmailAddress,
    pub name: String,
    pub title: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub notification_sender_name: String,
}
