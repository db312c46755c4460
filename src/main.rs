use anyhow::Context;
use portfolio::configuration::get_configuration;
use portfolio::domain::contact::service::Contact;
use portfolio::inbound::http::Application;
use portfolio::outbound::notifier::email_client::EmailClient;
use portfolio::outbound::telemetry::init_logger;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logger("portfolio", &configuration.log_level(), std::io::stdout);

    let owner = configuration
        .contact
        .owner_profile()
        .context("Invalid owner email address")?;
    let email_client = EmailClient::new(configuration.email_client)?;
    let contact_service = Contact::new(Arc::new(email_client), owner);
    let application = Application::build(contact_service, configuration.application).await?;

    application.run_until_stopped().await?;
    Ok(())
}
