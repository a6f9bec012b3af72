pub mod azcli;
pub mod cmd;
pub mod flow;
pub mod logging;
pub mod naming;
pub mod prompt;
pub mod settings;
pub mod ui;
