//! Shell execution of the generated command.
//!
//! Spawns exactly one child with stdout/stderr inherited from the parent, so
//! output streams straight to the terminal. The command text is passed through
//! verbatim as a single shell argument — escaping is the model's job.

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start shell: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("command exited with status {code}")]
    CommandFailed { code: i32 },
}

/// Which shell flavor runs the command. Resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellKind {
    Posix { shell: String },
    WindowsCmd,
    WindowsPowerShell,
}

impl ShellKind {
    pub fn detect() -> Self {
        Self::from_env(
            std::env::consts::OS,
            std::env::var("PSModulePath").ok().as_deref(),
            std::env::var("SHELL").ok().as_deref(),
        )
    }

    /// Pure resolution from (os, PSModulePath, SHELL), testable on any host.
    ///
    /// A non-empty `PSModulePath` marks a PowerShell session on Windows;
    /// everywhere else `$SHELL` wins, with `/bin/sh` as the fallback.
    pub fn from_env(os: &str, ps_module_path: Option<&str>, shell_var: Option<&str>) -> Self {
        if os == "windows" {
            if ps_module_path.is_some_and(|v| !v.is_empty()) {
                ShellKind::WindowsPowerShell
            } else {
                ShellKind::WindowsCmd
            }
        } else {
            let shell = shell_var.filter(|s| !s.is_empty()).unwrap_or("/bin/sh");
            ShellKind::Posix {
                shell: shell.to_string(),
            }
        }
    }

    /// Program and argument vector for running `command` under this shell.
    pub fn invocation<'a>(&'a self, command: &'a str) -> (&'a str, [&'a str; 2]) {
        match self {
            ShellKind::Posix { shell } => (shell.as_str(), ["-c", command]),
            ShellKind::WindowsCmd => ("cmd", ["/C", command]),
            ShellKind::WindowsPowerShell => ("powershell", ["-Command", command]),
        }
    }
}

/// Run the command and wait for it. Non-zero exit is a failure.
pub async fn execute(command: &str) -> Result<(), ExecError> {
    let kind = ShellKind::detect();
    let (program, args) = kind.invocation(command);

    let status = Command::new(program).args(args).status().await?;
    if !status.success() {
        return Err(ExecError::CommandFailed {
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_with_marker_selects_powershell() {
        let kind = ShellKind::from_env("windows", Some("C:\\Modules"), None);
        assert_eq!(kind, ShellKind::WindowsPowerShell);
        assert_eq!(
            kind.invocation("Get-ChildItem"),
            ("powershell", ["-Command", "Get-ChildItem"])
        );
    }

    #[test]
    fn windows_without_marker_selects_cmd() {
        assert_eq!(
            ShellKind::from_env("windows", None, None),
            ShellKind::WindowsCmd
        );
        assert_eq!(
            ShellKind::from_env("windows", Some(""), None),
            ShellKind::WindowsCmd
        );
        assert_eq!(
            ShellKind::WindowsCmd.invocation("dir"),
            ("cmd", ["/C", "dir"])
        );
    }

    #[test]
    fn posix_uses_shell_var_with_sh_fallback() {
        assert_eq!(
            ShellKind::from_env("linux", None, Some("/usr/bin/zsh")),
            ShellKind::Posix {
                shell: "/usr/bin/zsh".to_string()
            }
        );
        assert_eq!(
            ShellKind::from_env("macos", None, None),
            ShellKind::Posix {
                shell: "/bin/sh".to_string()
            }
        );
        assert_eq!(
            ShellKind::from_env("linux", None, Some("")),
            ShellKind::Posix {
                shell: "/bin/sh".to_string()
            }
        );
    }

    #[test]
    fn posix_invocation_passes_command_verbatim() {
        let kind = ShellKind::Posix {
            shell: "/bin/bash".to_string(),
        };
        let cmd = "echo \"a b\" && ls | wc -l";
        assert_eq!(kind.invocation(cmd), ("/bin/bash", ["-c", cmd]));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn execute_succeeds_on_zero_exit() {
        execute("true").await.expect("true should succeed");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn execute_surfaces_nonzero_exit_code() {
        match execute("exit 7").await {
            Err(ExecError::CommandFailed { code }) => assert_eq!(code, 7),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
