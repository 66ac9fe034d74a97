pub mod cli;
pub mod launcher;
pub mod logging;

// Public API
pub use cli::Cli;
pub use launcher::{launch, resolve_browser, resolve_profile_dir, LauncherError};
