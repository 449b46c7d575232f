//! Detection of environment facts not supplied by the config.

use std::path::Path;

/// Build tool reported when no marker file is found.
pub const UNKNOWN_BUILD_TOOL: &str = "unknown";

/// Shell used when neither the config nor `$SHELL` names one.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Marker files and the build tool they indicate, in priority order.
const BUILD_MARKERS: &[(&str, &str)] = &[
    ("Cargo.toml", "cargo"),
    ("build.gradle.kts", "gradle"),
    ("build.gradle", "gradle"),
    ("pom.xml", "maven"),
    ("package.json", "npm"),
    ("go.mod", "go"),
    ("pyproject.toml", "python"),
];

/// Detect the build tool from marker files in the project root.
pub fn detect_build_tool(project: &Path) -> Option<&'static str> {
    BUILD_MARKERS
        .iter()
        .find(|(marker, _)| project.join(marker).is_file())
        .map(|(_, tool)| *tool)
}

/// Operating system and architecture of this process, e.g. `linux x86_64`.
pub fn os_info() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Shell from the config, else the `$SHELL` value, else [`DEFAULT_SHELL`].
pub fn shell(configured: Option<&str>, env_shell: Option<String>) -> String {
    configured
        .map(str::to_string)
        .or(env_shell.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}
