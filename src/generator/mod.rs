//! Random string (password) generator

pub mod password;
pub mod session;

pub use password::{generate, generate_with_rng, GeneratorConfig};
pub use session::PasswordGenerator;
