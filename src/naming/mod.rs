//! Client for the resource naming REST service and the name generation
//! protocol built on it.

mod auth;
mod client;
mod error;
mod generate;
mod model;
mod service;

#[cfg(test)]
pub(crate) mod fake;

pub use auth::{ClientCredentials, TokenSource};
pub use client::NamingClient;
pub use error::*;
pub use generate::{MAX_ATTEMPTS, NameOutcome, generate_name};
pub use model::{
    Category, ComponentOption, ComponentSelection, GeneratedName, ResolvedComponents,
    ResourceTypeDescriptor,
};
pub use service::NamingService;
