use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the calculator protocol, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run()
}

#[cfg(feature = "tui")]
fn run() -> Result<()> {
    strcalc::tui_mode::run_tui()
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn run() -> Result<()> {
    strcalc::line_mode::run_line()
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    strcalc::repl::run(stdin.lock(), stdout.lock())?;
    Ok(())
}
