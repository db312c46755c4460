pub mod configuration;
pub mod domain;
pub mod form_client;
pub mod inbound;
pub mod outbound;
