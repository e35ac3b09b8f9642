//! Log backend setup.
//!
//! Everything logs through the `log` facade. The interactive UI owns stdout
//! and stderr is hidden behind the alternate screen, so it only logs when a
//! log file is given.

use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Non-interactive commands
    Stderr,
    /// Interactive UI; `None` disables logging
    File(Option<&'a Path>),
}

/// Install the global logger. Level comes from `RUST_LOG`, default `info`.
///
/// Calling this more than once keeps the first logger.
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(Some(path)) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::File(None) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii-cam.log");
        init(LogTarget::File(Some(&path))).unwrap();
        init(LogTarget::Stderr).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ascii-cam.log");
        assert!(init(LogTarget::File(Some(&path))).is_err());
    }
}
