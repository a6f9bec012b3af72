mod components;
mod menu;

pub use components::collect_components;
pub use menu::{GenerateMenu, ListMenu, MainMenu, MoveMenu, choose};

use inquire::{Confirm, InquireError, Select, error::InquireResult};
use std::fmt::Display;

pub fn select<T: Display>(message: &str, items: Vec<T>) -> InquireResult<T> {
    Select::new(message, items).with_page_size(15).prompt()
}

pub fn confirm(message: &str, default: bool) -> InquireResult<bool> {
    Confirm::new(message).with_default(default).prompt()
}

/// Esc backs out of the current flow; Ctrl-C leaves the program.
pub fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled)
}
