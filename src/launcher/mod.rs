use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tracing::{debug, info};

/// Chrome goes by many names.  We know them all!
pub const BROWSER_CANDIDATES: [&str; 5] = [
    "google-chrome",
    "google-chrome-stable",
    "google-chrome-beta",
    "google-chrome-unstable",
    "google-chrome-trunk",
];

/// Profile dir name under the user's config dir, shared across runs.
const DEFAULT_PROFILE_DIR: &str = "google-chrome-run_local";

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Could not find a browser; please use --browser")]
    NoBrowser,
    #[error("Failed to create profile dir {}: {source}", .path.display())]
    ProfileDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to start browser '{browser}': {source}")]
    Spawn {
        browser: String,
        #[source]
        source: std::io::Error,
    },
}

/// Set up a unique profile to avoid colliding with user settings.
///
/// Returns `explicit` when given, else `google-chrome-run_local` under the
/// user's config dir. The directory exists on return.
pub fn resolve_profile_dir(explicit: Option<&Path>) -> Result<PathBuf, LauncherError> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_PROFILE_DIR),
    };
    std::fs::create_dir_all(&dir).map_err(|source| LauncherError::ProfileDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Pick the browser to run tests against.
///
/// An explicit name is taken as-is without checking it. Otherwise the known
/// candidate names are probed in order and the first one that answers a
/// `--version` call wins.
pub async fn resolve_browser(explicit: Option<&str>) -> Result<String, LauncherError> {
    if let Some(browser) = explicit.filter(|name| !name.is_empty()) {
        return Ok(browser.to_string());
    }
    discover(&BROWSER_CANDIDATES).await
}

/// Probe `candidates` in declared order and return the first one that works.
pub async fn discover(candidates: &[&str]) -> Result<String, LauncherError> {
    for candidate in candidates {
        if probe(candidate).await {
            return Ok((*candidate).to_string());
        }
    }
    Err(LauncherError::NoBrowser)
}

/// Check whether `candidate` answers a `--version` call with exit code 0.
///
/// A missing executable and a nonzero exit are both "try the next one":
/// some sandboxed browsers exit nonzero on `--version` even though they
/// would launch fine. There is no timeout here, so a hung candidate blocks
/// the whole resolution.
async fn probe(candidate: &str) -> bool {
    if which::which(candidate).is_err() {
        debug!("Candidate '{}' not found in PATH", candidate);
        return false;
    }

    match tokio::process::Command::new(candidate)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
    {
        Ok(status) if status.success() => {
            debug!("Candidate '{}' answered --version", candidate);
            true
        }
        Ok(status) => {
            debug!("Candidate '{}' exited with {}", candidate, status);
            false
        }
        Err(e) => {
            debug!("Candidate '{}' failed to run: {}", candidate, e);
            false
        }
    }
}

/// Try to use the default X session when none is configured, so headless
/// and CI runs still have a target display.
pub fn ensure_display() {
    if std::env::var_os("DISPLAY").is_none() {
        std::env::set_var("DISPLAY", "0:0");
    }
}

/// Kick off the browser in the background so we exit.
///
/// Fire-and-forget: the child is never waited on and its output is not
/// captured. Once the spawn succeeds the browser is on its own.
pub fn launch(browser: &str, profile_dir: &Path, page: &str) -> Result<(), LauncherError> {
    info!("Running tests against browser \"{}\"", browser);
    info!("Tests page: {}", page);

    std::process::Command::new(browser)
        .arg(format!("--user-data-dir={}", profile_dir.display()))
        .arg(page)
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            browser: browser.to_string(),
            source,
        })?;

    Ok(())
}
