use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory forced by `--config-dir`; takes precedence over `$HOME`/XDG.
static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// What: Force the configuration directory for this process.
///
/// Inputs:
/// - `dir`: Directory to use instead of `$HOME/.config/aklatell`
///
/// Output:
/// - `true` when applied; `false` when an override was already set.
pub fn set_config_dir_override(dir: PathBuf) -> bool {
    CONFIG_DIR_OVERRIDE.set(dir).is_ok()
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/aklatell`, ensuring it exists.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join("aklatell");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Configuration directory (ensured to exist).
///
/// Order: `--config-dir` override, `$HOME/.config/aklatell`, then
/// `$XDG_CONFIG_HOME/aklatell`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        let _ = std::fs::create_dir_all(dir);
        return dir.clone();
    }
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("aklatell");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Settings file path: `<config>/settings.conf`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Key-value store path: `<config>/storage.json`.
pub fn storage_path() -> PathBuf {
    config_dir().join("storage.json")
}
