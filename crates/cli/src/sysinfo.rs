//! Host environment probe.
//!
//! Captured once per run into an immutable snapshot consumed by the prompt
//! builder. Everything is best-effort except the current user and working
//! directory — without those the prompt would be materially wrong, so they
//! abort the run.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SysinfoError {
    #[error("could not resolve current user")]
    UnknownUser,

    #[error("could not read current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
}

/// Snapshot of the host environment.
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub shell: String,
    pub username: String,
    pub home_dir: String,
    pub current_dir: String,
    /// Variable names only, sorted. Values never leave the host.
    pub env_var_names: Vec<String>,
}

impl SystemInfo {
    pub fn capture() -> Result<Self, SysinfoError> {
        let home = dirs::home_dir().ok_or(SysinfoError::UnknownUser)?;
        let username = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| {
                home.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .ok_or(SysinfoError::UnknownUser)?;

        let current_dir = std::env::current_dir()?.display().to_string();

        let shell = shell_name(
            std::env::consts::OS,
            std::env::var("PSModulePath").ok().as_deref(),
            std::env::var("SHELL").ok().as_deref(),
        );

        let mut env_var_names: Vec<String> = std::env::vars_os()
            .map(|(name, _)| name.to_string_lossy().into_owned())
            .collect();
        env_var_names.sort();

        Ok(Self {
            os: std::env::consts::OS.to_string(),
            os_version: os_version(),
            shell,
            username,
            home_dir: home.display().to_string(),
            current_dir,
            env_var_names,
        })
    }
}

/// Name of the shell the user is sitting in.
///
/// Windows has no `SHELL`; a non-empty `PSModulePath` marks a PowerShell
/// session, anything else is cmd. Elsewhere it is the basename of `$SHELL`.
fn shell_name(os: &str, ps_module_path: Option<&str>, shell_var: Option<&str>) -> String {
    if os == "windows" {
        if ps_module_path.is_some_and(|v| !v.is_empty()) {
            "powershell".to_string()
        } else {
            "cmd".to_string()
        }
    } else {
        Path::new(shell_var.unwrap_or_default())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Best-effort OS version label. Never errors — degrades to a generic name.
fn os_version() -> String {
    match std::env::consts::OS {
        "linux" => std::fs::read_to_string("/etc/os-release")
            .ok()
            .and_then(|contents| os_release_pretty_name(&contents))
            .unwrap_or_else(|| "Linux".to_string()),
        "macos" => {
            std::fs::read_to_string("/System/Library/CoreServices/SystemVersion.plist")
                .ok()
                .and_then(|plist| plist_product_version(&plist))
                .map(|ver| format!("macOS {ver}"))
                .unwrap_or_else(|| "macOS".to_string())
        }
        "windows" => std::env::var("OS").unwrap_or_default(),
        other => other.to_string(),
    }
}

fn os_release_pretty_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches('"').to_string())
}

fn plist_product_version(plist: &str) -> Option<String> {
    let (_, after_key) = plist.split_once("<key>ProductVersion</key>")?;
    let (_, after_open) = after_key.split_once("<string>")?;
    let (version, _) = after_open.split_once("</string>")?;
    Some(version.trim().to_string())
}
