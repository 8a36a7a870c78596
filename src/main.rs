use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use paintboard::config::{Config, MAX_WINDOWS};
use paintboard::session::{Session, SessionOptions, export_json, parse_script};
use paintboard::util::color_to_name;
use std::fs;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAINTBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(version = VERSION, about = "Shared whiteboard with synchronized canvas views")]
struct Cli {
    /// Config file to use instead of ~/.config/paintboard/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Board width in pixels (300-1000), overrides the config
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    width: Option<i32>,

    /// Board height in pixels (300-1000), overrides the config
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    height: Option<i32>,

    /// Number of views sharing the board, overrides the config
    #[arg(long, short = 'w', value_name = "N")]
    windows: Option<usize>,

    /// Input script to replay against the views
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory to write each view's frame to (window-<n>.json)
    #[arg(long, short = 'e', value_name = "DIR")]
    export: Option<PathBuf>,

    /// Also rasterize each view to window-<n>.png
    #[cfg(feature = "png")]
    #[arg(long, action = ArgAction::SetTrue, requires = "export")]
    png: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = SessionOptions::from(&config);
    // Command-line sizes are passed through unclamped so bad input is reported.
    if let Some(width) = cli.width {
        options.width = width;
    }
    if let Some(height) = cli.height {
        options.height = height;
    }
    if let Some(windows) = cli.windows {
        if !(1..=MAX_WINDOWS).contains(&windows) {
            bail!("--windows must be between 1 and {MAX_WINDOWS}, got {windows}");
        }
        options.windows = windows;
    }

    let mut session = Session::new(&options).context("Failed to open whiteboard session")?;
    println!(
        "Board {}x{} shared by {} window(s), pen {}",
        options.width,
        options.height,
        options.windows,
        color_to_name(&options.style.color)
    );

    if let Some(script_path) = &cli.script {
        let source = fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?;
        let events = parse_script(&source)
            .with_context(|| format!("Invalid script {}", script_path.display()))?;
        let applied = session
            .replay(&events)
            .with_context(|| format!("Failed to replay {}", script_path.display()))?;
        log::info!("Replayed {applied} event(s) from {}", script_path.display());

        for (index, view) in session.views().iter().enumerate() {
            let frame = view.frame();
            match frame.bounds() {
                Some(area) => println!(
                    "window {index}: {} segment(s) within {}x{} at ({}, {})",
                    frame.len(),
                    area.width,
                    area.height,
                    area.x,
                    area.y
                ),
                None => println!("window {index}: {} segment(s)", frame.len()),
            }
        }
    }

    if let Some(dir) = &cli.export {
        let written = export_json(&session, dir)?;
        println!("Exported {} frame(s) to {}", written.len(), dir.display());

        #[cfg(feature = "png")]
        if cli.png {
            let rendered = paintboard::session::export_png(&session, dir)?;
            println!("Rendered {} PNG(s) to {}", rendered.len(), dir.display());
        }
    }

    Ok(())
}
