use anyhow::Result;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Log to stderr, filtered by `RUST_LOG` (default `info`)
pub fn init_stderr() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Log to a file. Used while the TUI owns the terminal, since writing to
/// stderr would corrupt the display.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
