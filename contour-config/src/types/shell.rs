//! Process launch configuration: the local shell and SSH connections.

use crate::defaults;
use std::collections::BTreeMap;

/// Program started in a new terminal session.
///
/// The document accepts either a mapping or just the program as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionProgram {
    pub program: String,
    pub arguments: Vec<String>,
    /// Working directory of the spawned process; `~` is the home directory.
    pub initial_working_directory: String,
    /// Extra environment variables for the spawned process.
    pub environment: BTreeMap<String, String>,
    /// Spawn the program as a login shell.
    pub login: bool,
}

impl Default for ExecutionProgram {
    fn default() -> Self {
        Self {
            program: defaults::shell_program(),
            arguments: Vec::new(),
            initial_working_directory: "~".to_string(),
            environment: defaults::shell_environment(),
            login: false,
        }
    }
}

impl ExecutionProgram {
    /// Full command line, for logging.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.arguments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Remote host to connect to instead of spawning a local shell.
///
/// An empty `host` means SSH is not used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SshHost {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub private_key: String,
    pub public_key: String,
    pub known_hosts: String,
    pub forward_agent: bool,
}

impl Default for SshHost {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 22,
            user: String::new(),
            private_key: String::new(),
            public_key: String::new(),
            known_hosts: "~/.ssh/known_hosts".to_string(),
            forward_agent: false,
        }
    }
}

impl SshHost {
    pub fn is_enabled(&self) -> bool {
        !self.host.is_empty()
    }
}
