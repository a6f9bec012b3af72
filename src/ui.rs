use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::time::Duration;
use tabled::{Table, Tabled, settings::Style};

/// Runs `work` behind a spinner.
pub fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();

    spinner.finish_and_clear();
    result
}

pub fn header(title: &str) {
    println!("\n{}", title.bold().cyan());
}

pub fn success(message: impl Display) {
    println!("{} {message}", "✔".green());
}

pub fn note(message: impl Display) {
    println!("  {}", message.dimmed());
}

pub fn warn(message: impl Display) {
    eprintln!("{} {message}", "!".yellow().bold());
}

pub fn error(message: impl Display) {
    eprintln!("{} {message}", "✘".red().bold());
}

pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
