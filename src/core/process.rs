//! External process execution
//!
//! Every interaction with `glab` and `git` goes through the [`ProcessRunner`]
//! trait so the workflows above it can be driven by a scripted runner in
//! tests. [`SystemRunner`] is the production implementation on top of
//! [`tokio::process::Command`].

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Captured outcome of a buffered command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Standard output, whitespace-trimmed
    pub stdout: String,
    /// Standard error, whitespace-trimmed
    pub stderr: String,
    /// Process exit code
    pub exit_code: i32,
}

impl CommandResult {
    /// Result reported when the executable could not be launched at all
    pub fn launch_failure(reason: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: reason.into(),
            exit_code: 1,
        }
    }

    /// Whether the command exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of an interactive command (output went straight to the terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveResult {
    pub exit_code: i32,
}

impl InteractiveResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external executables on behalf of the GitLab and git wrappers.
///
/// Neither method fails: launch errors are folded into an exit code of 1 so
/// callers only ever inspect exit codes.
pub trait ProcessRunner: Send + Sync {
    /// Run a command without a terminal, capturing stdout and stderr fully.
    fn run_buffered(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = CommandResult> + Send;

    /// Run a command sharing the caller's terminal.
    ///
    /// When `input` is given, stdin is a pipe that receives `input` and is
    /// then closed; stdout and stderr stay attached to the terminal.
    fn run_interactive(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> impl Future<Output = InteractiveResult> + Send;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    current_dir: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the process working directory
    pub fn with_current_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: Some(dir.into()),
        }
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ProcessRunner for SystemRunner {
    async fn run_buffered(&self, program: &str, args: &[String]) -> CommandResult {
        let mut cmd = self.command(program, args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(program, ?args, "spawning buffered command");

        match cmd.output().await {
            Ok(output) => CommandResult {
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                // Killed by a signal: no code to report
                exit_code: output.status.code().unwrap_or(0),
            },
            Err(e) => {
                debug!(program, error = %e, "failed to launch command");
                CommandResult::launch_failure(e.to_string())
            }
        }
    }

    async fn run_interactive(
        &self,
        program: &str,
        args: &[String],
        input: Option<&str>,
    ) -> InteractiveResult {
        let mut cmd = self.command(program, args);
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if input.is_some() {
            cmd.stdin(Stdio::piped());
        } else {
            cmd.stdin(Stdio::inherit());
        }

        debug!(program, ?args, piped_input = input.is_some(), "spawning interactive command");

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                eprintln!("Failed to execute command: {}", e);
                return InteractiveResult { exit_code: 1 };
            }
        };

        if let Some(input) = input {
            if let Some(mut stdin) = child.stdin.take() {
                if let Err(e) = stdin.write_all(input.as_bytes()).await {
                    warn!(program, error = %e, "failed to write to child stdin");
                }
                // Closing stdin signals end of input
                drop(stdin);
            }
        }

        match child.wait().await {
            Ok(status) => InteractiveResult {
                exit_code: status.code().unwrap_or(0),
            },
            Err(e) => {
                eprintln!("Failed to execute command: {}", e);
                InteractiveResult { exit_code: 1 }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted [`ProcessRunner`] that records every call.

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use tokio::sync::Barrier;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub program: String,
        pub args: Vec<String>,
        pub input: Option<String>,
        pub interactive: bool,
    }

    impl RecordedCall {
        pub fn command_line(&self) -> String {
            command_line(&self.program, &self.args)
        }
    }

    #[derive(Default)]
    struct Script {
        responses: HashMap<String, CommandResult>,
        interactive_exit: i32,
        calls: Vec<RecordedCall>,
        barrier: Option<Arc<Barrier>>,
    }

    /// Returns canned results keyed by the full command line.
    ///
    /// Unscripted buffered commands exit 1 with `unexpected command` on stderr.
    #[derive(Clone, Default)]
    pub struct ScriptedRunner {
        script: Arc<Mutex<Script>>,
    }

    fn command_line(program: &str, args: &[String]) -> String {
        std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, command: &str, result: CommandResult) -> Self {
            self.script
                .lock()
                .unwrap()
                .responses
                .insert(command.to_string(), result);
            self
        }

        pub fn succeed(self, command: &str, stdout: &str) -> Self {
            self.respond(
                command,
                CommandResult {
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                    exit_code: 0,
                },
            )
        }

        pub fn fail(self, command: &str, stderr: &str) -> Self {
            self.respond(
                command,
                CommandResult {
                    stdout: String::new(),
                    stderr: stderr.to_string(),
                    exit_code: 1,
                },
            )
        }

        pub fn interactive_exit(self, code: i32) -> Self {
            self.script.lock().unwrap().interactive_exit = code;
            self
        }

        /// Hold every buffered call until `parties` calls are in flight
        pub fn with_barrier(self, parties: usize) -> Self {
            self.script.lock().unwrap().barrier = Some(Arc::new(Barrier::new(parties)));
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.script.lock().unwrap().calls.clone()
        }

        pub fn command_lines(&self) -> Vec<String> {
            self.calls().iter().map(RecordedCall::command_line).collect()
        }
    }

    impl ProcessRunner for ScriptedRunner {
        async fn run_buffered(&self, program: &str, args: &[String]) -> CommandResult {
            let (result, barrier) = {
                let mut script = self.script.lock().unwrap();
                script.calls.push(RecordedCall {
                    program: program.to_string(),
                    args: args.to_vec(),
                    input: None,
                    interactive: false,
                });
                let result = script
                    .responses
                    .get(&command_line(program, args))
                    .cloned()
                    .unwrap_or_else(|| CommandResult::launch_failure("unexpected command"));
                (result, script.barrier.clone())
            };

            if let Some(barrier) = barrier {
                barrier.wait().await;
            }

            result
        }

        async fn run_interactive(
            &self,
            program: &str,
            args: &[String],
            input: Option<&str>,
        ) -> InteractiveResult {
            let mut script = self.script.lock().unwrap();
            script.calls.push(RecordedCall {
                program: program.to_string(),
                args: args.to_vec(),
                input: input.map(str::to_string),
                interactive: true,
            });
            InteractiveResult {
                exit_code: script.interactive_exit,
            }
        }
    }
}
