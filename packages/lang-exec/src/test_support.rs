#[cfg(test)]
pub mod mock {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::host::{CommandHost, CommandMode, CommandOutcome, HostError};
    use crate::state::Environment;

    type Handler = Box<dyn Fn(&str, &Environment) -> Result<CommandOutcome, HostError>>;

    /// An in-memory `CommandHost` that answers from canned results and
    /// records every call.
    pub struct MockHost {
        results: HashMap<String, Result<CommandOutcome, HostError>>,
        handler: Option<Handler>,
        calls: RefCell<Vec<(CommandMode, String)>>,
    }

    impl Default for MockHost {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockHost {
        pub fn new() -> Self {
            Self {
                results: HashMap::new(),
                handler: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Register a pre-configured outcome for an exact command line.
        pub fn with_outcome(mut self, command_line: &str, outcome: CommandOutcome) -> Self {
            self.results.insert(command_line.to_string(), Ok(outcome));
            self
        }

        /// Register a fault for an exact command line.
        pub fn with_fault(mut self, command_line: &str, fault: HostError) -> Self {
            self.results.insert(command_line.to_string(), Err(fault));
            self
        }

        /// Answer any command line not registered via `with_outcome` /
        /// `with_fault`.
        pub fn with_handler<F>(mut self, handler: F) -> Self
        where
            F: Fn(&str, &Environment) -> Result<CommandOutcome, HostError> + 'static,
        {
            self.handler = Some(Box::new(handler));
            self
        }

        pub fn get_calls(&self) -> Vec<(CommandMode, String)> {
            self.calls.borrow().clone()
        }
    }

    impl CommandHost for MockHost {
        fn run_command(
            &self,
            mode: CommandMode,
            command_line: &str,
            env: &Environment,
        ) -> Result<CommandOutcome, HostError> {
            self.calls
                .borrow_mut()
                .push((mode, command_line.to_string()));
            if let Some(result) = self.results.get(command_line) {
                return result.clone();
            }
            match &self.handler {
                Some(handler) => handler(command_line, env),
                None => Ok(CommandOutcome::failure(
                    127,
                    format!("{command_line}: command not found"),
                )),
            }
        }
    }
}
