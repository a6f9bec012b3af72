use super::error::{ErrorAzCli, ResultAzCli};
use crate::settings::Settings;
use serde::de::DeserializeOwned;
use std::io;
use std::process::{Command, Output};

const AZ: &str = if cfg!(windows) { "az.cmd" } else { "az" };

/// Runs one `az` invocation and hands back its stdout.
pub trait AzRunner {
    fn run(&self, args: &[&str]) -> ResultAzCli<Vec<u8>>;
}

/// The real `az` executable. Arguments are passed as-is, never through a
/// shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct Process;

fn spawn(args: &[&str]) -> ResultAzCli<Output> {
    match Command::new(AZ).args(args).output() {
        Ok(output) => Ok(output),
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound => Err(ErrorAzCli::AzNotInstalled),
            _ => Err(ErrorAzCli::Io(err)),
        },
    }
}

impl AzRunner for Process {
    fn run(&self, args: &[&str]) -> ResultAzCli<Vec<u8>> {
        tracing::debug!("az {}", args.join(" "));

        let output = spawn(args)?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!("az {} failed: {}", args.join(" "), stderr);

        if stderr.contains("az login") {
            return Err(ErrorAzCli::NotLoggedIn);
        }

        Err(ErrorAzCli::CommandFailure {
            code: output.status.code(),
            stderr,
        })
    }
}

/// Empty output is success without data.
pub fn parse<T: DeserializeOwned>(stdout: &[u8]) -> ResultAzCli<Option<T>> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(stdout)?))
}

/// Typed operations over `az`.
pub struct AzCli<R = Process> {
    runner: R,
    runtime: String,
    os_type: String,
}

impl AzCli<Process> {
    pub fn from_settings(settings: &Settings) -> Self {
        AzCli::new(Process)
            .with_function_runtime(&settings.function_runtime, &settings.function_os_type)
    }
}

impl<R: AzRunner> AzCli<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            runtime: "python".into(),
            os_type: "Linux".into(),
        }
    }

    pub fn with_function_runtime(mut self, runtime: &str, os_type: &str) -> Self {
        self.runtime = runtime.to_string();
        self.os_type = os_type.to_string();
        self
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    pub(super) fn function_runtime(&self) -> (&str, &str) {
        (&self.runtime, &self.os_type)
    }

    pub(super) fn az<T: DeserializeOwned>(&self, args: &[&str]) -> ResultAzCli<Option<T>> {
        let stdout = self.runner.run(args)?;
        parse(&stdout).inspect_err(|err| {
            tracing::error!(
                "az {} output is not JSON: {err}: {}",
                args.join(" "),
                String::from_utf8_lossy(&stdout)
            )
        })
    }

    pub(super) fn az_list<T: DeserializeOwned>(&self, args: &[&str]) -> ResultAzCli<Vec<T>> {
        Ok(self.az(args)?.unwrap_or_default())
    }
}
