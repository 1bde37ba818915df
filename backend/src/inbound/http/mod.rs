//! HTTP inbound adapter exposing the course endpoints and the app shell.

pub mod courses;
pub mod error;
pub mod health;
pub mod shell;
pub mod state;

pub use error::{EndpointFailure, EndpointResult, ErrorBody};
