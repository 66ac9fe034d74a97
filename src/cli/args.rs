use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTML test runner", long_about = None)]
pub struct Cli {
    /// Run with debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Browser program to run tests against
    #[arg(long, env = "CHROME_BIN")]
    pub browser: Option<String>,

    /// Browser profile dir to run against
    #[arg(long, env = "CHROME_TEST_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Path or URL of the test page to open
    pub path: String,
}
