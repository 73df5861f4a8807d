use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use assistant_lang::Value;

use crate::config::HostConfig;
use crate::state::Environment;

// ---------------------------------------------------------------------------
// Types shared between the trait and its implementations
// ---------------------------------------------------------------------------

/// How a non-zero exit status is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandMode {
    /// A non-zero exit is a fault: `Err(HostError::NonZeroExit)`.
    Checked,
    /// A non-zero exit is a normal outcome with `is_success() == false`.
    Unchecked,
}

/// A completed command run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub exit_code: i32,
    /// stdout and stderr interleaved in the order they were written.
    pub output: String,
}

impl CommandOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            output: output.into(),
        }
    }

    pub fn failure(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("command exited with status {code}")]
    NonZeroExit { code: i32, output: String },

    #[error("failed to spawn `{program}`: {message}")]
    Spawn { program: String, message: String },
}

impl HostError {
    /// Whatever output the command produced before the fault.
    pub fn into_output(self) -> String {
        match self {
            Self::NonZeroExit { output, .. } => output,
            Self::Spawn { .. } => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// CommandHost trait — implemented by ProcessHost or test stubs
// ---------------------------------------------------------------------------

pub trait CommandHost {
    /// Run `command_line` with access to the variables in `env`, blocking
    /// until it completes.
    fn run_command(
        &self,
        mode: CommandMode,
        command_line: &str,
        env: &Environment,
    ) -> Result<CommandOutcome, HostError>;
}

// ---------------------------------------------------------------------------
// ProcessHost — runs command lines through a real shell
// ---------------------------------------------------------------------------

/// Runs command lines as `<shell> <shell_args...> <script>`, where the
/// script first merges stderr into stdout so the captured text keeps the
/// order in which the command wrote it.
#[derive(Debug, Clone, Default)]
pub struct ProcessHost {
    config: HostConfig,
}

impl ProcessHost {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    fn build_command(&self, command_line: &str, env: &Environment) -> Command {
        let mut cmd = Command::new(&self.config.shell);
        cmd.args(&self.config.shell_args)
            .arg(format!("exec 2>&1\n{command_line}"))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &self.config.cwd {
            cmd.current_dir(cwd);
        }
        if self.config.export_variables {
            for (name, value) in env.iter() {
                if !is_valid_env_name(name) {
                    continue;
                }
                match value {
                    Value::Text(_) | Value::Bool(_) => {
                        cmd.env(name, value.to_string());
                    }
                    Value::List(_) | Value::Mapping(_) => {
                        tracing::trace!(name, "not exporting structured variable");
                    }
                }
            }
        }
        cmd
    }
}

impl CommandHost for ProcessHost {
    #[tracing::instrument(level = "debug", skip(self, env), fields(shell = %self.config.shell))]
    fn run_command(
        &self,
        mode: CommandMode,
        command_line: &str,
        env: &Environment,
    ) -> Result<CommandOutcome, HostError> {
        let output = self
            .build_command(command_line, env)
            .output()
            .map_err(|e| HostError::Spawn {
                program: self.config.shell.clone(),
                message: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        // Only reachable if the shell itself complains before `exec 2>&1`.
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        if self.config.strip_trailing_newlines {
            let trimmed = text.trim_end_matches(&['\n', '\r'][..]).len();
            text.truncate(trimmed);
        }

        // Killed by a signal: no exit code, report as a generic failure.
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::trace!(exit_code, output_len = text.len(), "command finished");

        match mode {
            CommandMode::Checked if exit_code != 0 => Err(HostError::NonZeroExit {
                code: exit_code,
                output: text,
            }),
            _ if exit_code == 0 => Ok(CommandOutcome::success(text)),
            _ => Ok(CommandOutcome::failure(exit_code, text)),
        }
    }
}

/// Shell-exportable variable name: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
