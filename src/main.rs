use std::error::Error;
use std::time::Duration;

use clap::Parser;

use ascii_cam::cli::{self, Args, Command, RunOptions, Source};
use ascii_cam::config::Config;
use ascii_cam::event_loop;
use ascii_cam::logging::{self, LogTarget};
use ascii_cam::media::{MediaSource, TestPatternSource};
use ascii_cam::scene::Viewport;
use ascii_cam::session::{Session, SessionSettings};
use ascii_cam::terminal::{RawModeGuard, TerminalSize};

#[cfg(not(feature = "native-camera"))]
const NATIVE_UNAVAILABLE: &str =
    "Native camera support is not compiled in. Rebuild with `--features native-camera` \
     or use `--source test-pattern`.";

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let interactive = matches!(args.command, None | Some(Command::Run));
    let log_target = match (&args.options.log_file, interactive) {
        (Some(path), _) => LogTarget::File(Some(path.as_path())),
        (None, true) => LogTarget::File(None),
        (None, false) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    match args.command {
        Some(Command::ListCameras) => cli::list_cameras()?,
        Some(Command::ListSchemes) => cli::list_schemes(&mut std::io::stdout())?,
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, args.options.config.as_deref())?
        }
        Some(Command::Snapshot { width, height }) => {
            let config = Config::load(args.options.config.as_deref())?;
            let text = take_snapshot(&config, &args.options, Viewport::new(width, height))?;
            println!("{}", text);
        }
        Some(Command::Run) | None => {
            let config = Config::load(args.options.config.as_deref())?;
            run_interactive(&config, &args.options)?;
        }
    }
    Ok(())
}

/// Settings from the config file, overridden by command-line options.
fn session_settings(config: &Config, options: &RunOptions) -> SessionSettings {
    let mut settings = config.session_settings();
    options.apply(&mut settings);
    settings
}

#[cfg(feature = "native-camera")]
fn native_source(config: &Config) -> ascii_cam::media::native::NativeCameraSource {
    ascii_cam::media::native::NativeCameraSource {
        front_device: config.camera.front_device,
        back_device: config.camera.back_device,
        fps: config.camera.fps,
        mirror_front: config.camera.mirror,
    }
}

fn take_snapshot(
    config: &Config,
    options: &RunOptions,
    viewport: Viewport,
) -> Result<String, Box<dyn Error>> {
    let settings = session_settings(config, options);
    let text = match options.source.unwrap_or_default() {
        Source::TestPattern => cli::snapshot(TestPatternSource::new(), settings, viewport)?,
        #[cfg(feature = "native-camera")]
        Source::Native => cli::snapshot(native_source(config), settings, viewport)?,
        #[cfg(not(feature = "native-camera"))]
        Source::Native => return Err(NATIVE_UNAVAILABLE.into()),
    };
    Ok(text)
}

fn run_interactive(config: &Config, options: &RunOptions) -> Result<(), Box<dyn Error>> {
    match options.source.unwrap_or_default() {
        Source::TestPattern => run_session(TestPatternSource::new(), config, options),
        #[cfg(feature = "native-camera")]
        Source::Native => run_session(native_source(config), config, options),
        #[cfg(not(feature = "native-camera"))]
        Source::Native => Err(NATIVE_UNAVAILABLE.into()),
    }
}

fn run_session<M: MediaSource>(
    media: M,
    config: &Config,
    options: &RunOptions,
) -> Result<(), Box<dyn Error>> {
    let settings = session_settings(config, options);
    let frame_interval = Duration::from_millis(config.ui.frame_interval_ms.max(1));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let mut guard = RawModeGuard::enter()?;
    let size = TerminalSize::query()?;
    log::info!(
        "Terminal {}x{} cells, viewport {}",
        size.cols,
        size.rows,
        size.viewport
    );

    let mut session = Session::new(media, settings, size.viewport);
    if options.autostart {
        // A failure is shown in the error area; the user can retry with `s`
        let _ = session.start();
    }

    let result = rt.block_on(event_loop::run(&mut session, size, frame_interval));
    drop(session);
    guard.exit()?;

    result.map_err(|e| e as Box<dyn Error>)
}
