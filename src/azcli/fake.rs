use super::error::{ErrorAzCli, ResultAzCli};
use super::run::AzRunner;
use std::cell::RefCell;

type Handler = Box<dyn Fn(&[&str]) -> ResultAzCli<Vec<u8>>>;

/// Records every invocation and answers through a handler.
pub struct FakeRunner {
    handler: Handler,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&[&str]) -> ResultAzCli<Vec<u8>> + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AzRunner for FakeRunner {
    fn run(&self, args: &[&str]) -> ResultAzCli<Vec<u8>> {
        self.calls.borrow_mut().push(args.join(" "));
        (self.handler)(args)
    }
}

pub fn not_found(name: &str) -> ErrorAzCli {
    ErrorAzCli::CommandFailure {
        code: Some(3),
        stderr: format!("(ResourceNotFound) The Resource 'Microsoft.Web/sites/{name}' was not found."),
    }
}

pub fn failure(stderr: &str) -> ErrorAzCli {
    ErrorAzCli::CommandFailure {
        code: Some(1),
        stderr: stderr.to_string(),
    }
}
