use crate::configuration::ApplicationSettings;
use crate::domain::contact::ports::ContactService;
use crate::inbound::http::errors::{AppError, INVALID_BODY_MESSAGE};
use crate::inbound::http::handlers::{contact, health_check, home};
use crate::inbound::http::state::SharedContactState;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod errors;
mod handlers;
pub mod state;
mod utils;

pub use handlers::contact::{ContactResponse, MESSAGE_SENT};

pub struct Application {
    port: u16,
    server: Server,
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Rejected a malformed contact request body");
        AppError::ValidationError(INVALID_BODY_MESSAGE.to_string()).into()
    })
}

fn run<CS: ContactService>(
    listener: TcpListener,
    contact_state: SharedContactState<CS>,
) -> Result<Server, std::io::Error> {
    let contact_state = web::Data::new(contact_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .app_data(contact_state.clone())
            .app_data(json_config())
            .route("/api/contact", web::post().to(contact::<CS>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

impl Application {
    pub async fn build<CS: ContactService>(
        contact_service: CS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server: Server = run(listener, SharedContactState::new(contact_service))?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
