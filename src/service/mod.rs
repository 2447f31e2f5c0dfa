pub mod generation;

pub use generation::{Generation, PasswordGenerator};
