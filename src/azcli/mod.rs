mod error;
mod functionapp;
mod group;
mod mover;
mod run;
mod subscription;

#[cfg(test)]
pub(crate) mod fake;

pub use error::*;
pub use functionapp::{FunctionApp, FunctionAppSpec};
pub use group::ResourceGroup;
pub use mover::{MoveReport, MoveRequest, SourceRemoval};
pub use run::{AzCli, AzRunner, Process, parse};
pub use subscription::Subscription;
