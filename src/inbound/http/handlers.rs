pub mod contact;
pub mod health_check;
pub mod home;

pub use contact::contact;
pub use health_check::health_check;
pub use home::home;
