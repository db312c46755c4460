pub mod email;
pub mod message;
pub mod name;
pub mod notifications;
pub mod owner;
pub mod submission;
