//! External service integrations

pub mod prediction;
