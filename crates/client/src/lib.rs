mod api;
mod auth;
mod client;
mod credential;
mod error;
mod transport;

pub use api::*;
pub use auth::*;
pub use client::*;
pub use credential::*;
pub use error::*;
pub use transport::*;

pub use reqwest::{Method, StatusCode};
