pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod router;
pub mod service;
pub mod session;

pub use error::PassforgeError;
pub use generator::PasswordOptions;
pub use session::Session;
