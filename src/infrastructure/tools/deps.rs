// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Startup probing of the external tool dependencies.

use std::path::{Path, PathBuf};

/// Tools the transform pipeline shells out to.
pub const REQUIRED_TOOLS: &[&str] = &["convert", "cwebp", "gif2webp"];

/// Names from `tools` that cannot be found on `PATH`.
///
/// A missing tool is not fatal at startup: requests that never need it
/// still work, so the caller only logs a warning.
pub fn missing_dependencies(tools: &[&str]) -> Vec<String> {
    tools
        .iter()
        .filter(|tool| find_in_path(tool).is_none())
        .map(ToString::to_string)
        .collect()
}

fn find_in_path(command: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;

    std::env::split_paths(&path)
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_is_reported_missing() {
        let missing = missing_dependencies(&["picel-no-such-tool"]);
        assert_eq!(missing, vec!["picel-no-such-tool".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_common_tool_is_found() {
        assert!(missing_dependencies(&["ls"]).is_empty());
    }

    #[test]
    fn test_empty_probe() {
        assert!(missing_dependencies(&[]).is_empty());
    }
}
