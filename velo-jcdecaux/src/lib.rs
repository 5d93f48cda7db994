pub mod error;
pub mod history;
pub mod snapshot;
pub mod stands;

#[cfg(feature = "api")]
pub mod client;
