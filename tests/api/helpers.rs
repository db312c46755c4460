use once_cell::sync::Lazy;
use portfolio::configuration::get_configuration;
use portfolio::domain::contact::service::Contact;
use portfolio::form_client::ContactFormClient;
use portfolio::inbound::http::Application;
use portfolio::outbound::notifier::email_client::EmailClient;
use portfolio::outbound::telemetry::init_logger;
use std::sync::Arc;
use wiremock::MockServer;

pub const OWNER_EMAIL: &str = "owner@example.com";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub form_client: ContactFormClient,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Bodies of the requests received by the email provider, in arrival order.
    pub async fn email_request_bodies(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let c = get_configuration().expect("Failed to read configuration");
    let default_filter_level = c.general.log_level;
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(&subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(&subscriber_name, &default_filter_level, std::io::sink);
    }
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let email_server = MockServer::start().await;
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout_milliseconds = 2000;
        c.contact.owner_email = OWNER_EMAIL.to_string();
        c
    };

    let owner = configuration
        .contact
        .owner_profile()
        .expect("Invalid owner profile");
    let email_client =
        EmailClient::new(configuration.email_client).expect("Failed to build email client");
    let contact_service = Contact::new(Arc::new(email_client), owner);

    let application = Application::build(contact_service, configuration.application)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        form_client: ContactFormClient::new(&address),
        address,
        email_server,
    }
}
