use chrono::{DateTime, Utc};
use htmlescape::encode_minimal;

use super::{
    email::{
        EmailError, EmailHtmlContent, EmailMessage, EmailSubject, EmailTextContent, OutgoingEmail,
    },
    owner::OwnerProfile,
    submission::Submission,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Summary of a submission addressed to the site owner.
pub fn owner_notification(
    submission: &Submission,
    owner: &OwnerProfile,
    submitted_at: DateTime<Utc>,
) -> Result<OutgoingEmail, EmailError> {
    let name = submission.name.as_ref();
    let email = submission.email.as_ref();
    let message = submission.message.as_ref();
    let submitted_at = submitted_at.format(TIMESTAMP_FORMAT).to_string();

    let subject = EmailSubject::try_from(format!("New Portfolio Contact: {}", name))?;

    let html_name = encode_minimal(name);
    let html_email = encode_minimal(email);
    let html_message = encode_minimal(message).replace('\n', "<br>");
    let html_content = EmailHtmlContent::try_from(format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>New Portfolio Contact</h1>
  <h2>Contact Details</h2>
  <p><strong>Name:</strong> {html_name}</p>
  <p><strong>Email:</strong> <a href="mailto:{html_email}">{html_email}</a></p>
  <p><strong>Submitted:</strong> {submitted_at}</p>
  <h2>Message</h2>
  <p>{html_message}</p>
  <p><a href="mailto:{html_email}">Reply to {html_name}</a></p>
</div>"#
    ))?;

    let text_content = EmailTextContent::try_from(format!(
        "New Portfolio Contact\n\n\
        Name: {name}\n\
        Email: {email}\n\
        Submitted: {submitted_at}\n\n\
        Message:\n\
        {message}\n"
    ))?;

    Ok(OutgoingEmail::new(
        &owner.notification_sender_name,
        owner.email.clone(),
        EmailMessage::new(subject, html_content, text_content),
    ))
}

/// Auto-reply sent back to whoever filled in the form.
pub fn submitter_acknowledgment(
    submission: &Submission,
    owner: &OwnerProfile,
) -> Result<OutgoingEmail, EmailError> {
    let name = submission.name.as_ref();
    let message = submission.message.as_ref();

    let subject = EmailSubject::try_from(format!("Thanks for reaching out! - {}", owner.name))?;

    let html_name = encode_minimal(name);
    let html_message = encode_minimal(message);
    let html_content = EmailHtmlContent::try_from(format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>Thanks for reaching out!</h1>
  <p>Hi <strong>{html_name}</strong>,</p>
  <p>Thank you for contacting me through my portfolio website! I've received your message and will get back to you as soon as possible.</p>
  <p><strong>Your message:</strong></p>
  <p><em>"{html_message}"</em></p>
  <p>I typically respond within 24-48 hours. In the meantime, feel free to check out my projects on <a href="{github}">GitHub</a> or connect with me on <a href="{linkedin}">LinkedIn</a>.</p>
  <p>Best regards,<br><strong>{owner_name}</strong><br>{owner_title}</p>
</div>"#,
        github = encode_minimal(&owner.github_url),
        linkedin = encode_minimal(&owner.linkedin_url),
        owner_name = encode_minimal(&owner.name),
        owner_title = encode_minimal(&owner.title),
    ))?;

    let text_content = EmailTextContent::try_from(format!(
        "Hi {name},\n\n\
        Thank you for contacting me through my portfolio website! I've received your message and will get back to you as soon as possible.\n\n\
        Your message: \"{message}\"\n\n\
        I typically respond within 24-48 hours. In the meantime, feel free to check out my projects on GitHub ({github}) or connect with me on LinkedIn ({linkedin}).\n\n\
        Best regards,\n\
        {owner_name}\n\
        {owner_title}\n",
        github = owner.github_url,
        linkedin = owner.linkedin_url,
        owner_name = owner.name,
        owner_title = owner.title,
    ))?;

    Ok(OutgoingEmail::new(
        &owner.name,
        submission.email.clone(),
        EmailMessage::new(subject, html_content, text_content),
    ))
}
