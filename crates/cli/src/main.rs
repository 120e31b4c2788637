#![deny(unsafe_code)]
//! CLI binary for the wave-field renderer.
//!
//! Subcommands:
//! - `film` — play the animation in the terminal
//! - `snapshot` — render one frame to PNG
//! - `frames` — render every frame to a numbered PNG sequence
//! - `extrema` — print the swept field bounds
//! - `list` — print available fields and channels

mod error;

use clap::{ArgAction, Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::Level;
use wave_field_core::{Channel, FieldKind, Hsv, RenderConfig, WaveFieldRenderer};
use wave_field_present::{write_png, PngSequenceSink, TerminalSink};

/// Terminal-sized defaults for `film`.
const FILM_WIDTH: usize = 60;
const FILM_HEIGHT: usize = 30;

#[derive(Parser)]
#[command(name = "wave-field", about = "Animated wave-field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Settings shared by every command that builds a renderer.
///
/// `--config` seeds the configuration from a JSON object; explicit flags
/// override it.
#[derive(Args)]
struct RenderArgs {
    /// Frame width in pixels.
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Frame height in pixels.
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Number of frames in the animation.
    #[arg(short = 'n', long)]
    frames: Option<usize>,

    /// Wave function (interference, ripple).
    #[arg(short, long)]
    field: Option<String>,

    /// Channel that receives the field intensity (hue, saturation, value).
    #[arg(short, long)]
    channel: Option<String>,

    /// Base color as "h,s,v" (hue 0-179, saturation and value 0-255).
    #[arg(long)]
    base: Option<String>,

    /// Full render configuration as a JSON object.
    #[arg(long)]
    config: Option<String>,
}

impl RenderArgs {
    fn resolve(&self, defaults: RenderConfig) -> Result<RenderConfig, CliError> {
        let mut config = match &self.config {
            Some(raw) => {
                let value: serde_json::Value = serde_json::from_str(raw)
                    .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
                RenderConfig::from_json(&value)?
            }
            None => defaults,
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(frames) = self.frames {
            config.frame_count = frames;
        }
        if let Some(field) = &self.field {
            config.field = FieldKind::from_name(field)?;
        }
        if let Some(channel) = &self.channel {
            config.channel = Channel::from_name(channel)?;
        }
        if let Some(base) = &self.base {
            config.base = parse_hsv(base)?;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Play the animation in the terminal using 24-bit color.
    Film {
        #[command(flatten)]
        render: RenderArgs,

        /// Pause between frames in milliseconds.
        #[arg(short, long, default_value_t = 100)]
        delay_ms: u64,

        /// Glyph printed for every pixel.
        #[arg(short, long, default_value_t = wave_field_present::terminal::DEFAULT_GLYPH)]
        glyph: char,
    },
    /// Render a single frame to a PNG file.
    Snapshot {
        #[command(flatten)]
        render: RenderArgs,

        /// Frame index to render.
        #[arg(short = 't', long, default_value_t = 0)]
        frame: usize,

        /// Output file path.
        #[arg(short, long, default_value = "wave.png")]
        output: PathBuf,
    },
    /// Render every frame to a numbered PNG sequence.
    Frames {
        #[command(flatten)]
        render: RenderArgs,

        /// Output directory (created if missing).
        #[arg(short, long, default_value = "frames")]
        dir: PathBuf,

        /// File name prefix.
        #[arg(long, default_value = "frame")]
        prefix: String,
    },
    /// Sweep the field and print its global minimum and maximum.
    Extrema {
        #[command(flatten)]
        render: RenderArgs,
    },
    /// List available fields and channels.
    List,
}

/// Parses `"h,s,v"` into an [`Hsv`] color.
fn parse_hsv(raw: &str) -> Result<Hsv, CliError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [h, s, v] = parts.as_slice() else {
        return Err(CliError::Input(format!(
            "invalid --base '{raw}': expected three comma-separated values"
        )));
    };
    let byte = |part: &str| {
        part.parse::<u8>()
            .map_err(|e| CliError::Input(format!("invalid --base component '{part}': {e}")))
    };
    Ok(Hsv::new(byte(h)?, byte(s)?, byte(v)?))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let fields = FieldKind::list_names();
            let channels = Channel::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "fields": fields,
                    "channels": channels,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Fields:");
                for name in fields {
                    println!("  {name}");
                }
                println!("Channels:");
                println!("  {}", channels.join(", "));
            }
        }
        Command::Extrema { render } => {
            let config = render.resolve(RenderConfig::default())?;
            let renderer = WaveFieldRenderer::configure(config)?;
            let extrema = renderer.extrema();
            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "extrema": extrema,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("min {} max {}", extrema.min, extrema.max);
            }
        }
        Command::Snapshot {
            render,
            frame,
            output,
        } => {
            let config = render.resolve(RenderConfig::default())?;
            let mut renderer = WaveFieldRenderer::configure(config)?;
            write_png(renderer.render_frame(frame)?, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "frame": frame,
                    "overshoots": renderer.last_stats().map_or(0, |s| s.overshoots),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frame {frame} ({}x{}) -> {}",
                    config.field.name(),
                    config.width,
                    config.height,
                    output.display()
                );
            }
        }
        Command::Frames {
            render,
            dir,
            prefix,
        } => {
            let config = render.resolve(RenderConfig::default())?;
            let mut renderer = WaveFieldRenderer::configure(config)?;
            let mut sink = PngSequenceSink::with_prefix(&dir, &prefix)?;
            renderer.run_animation(Duration::ZERO, &mut sink)?;

            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "written": sink.written(),
                    "dir": dir.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("wrote {} frames -> {}", sink.written(), dir.display());
            }
        }
        Command::Film {
            render,
            delay_ms,
            glyph,
        } => {
            let defaults = RenderConfig {
                width: FILM_WIDTH,
                height: FILM_HEIGHT,
                ..RenderConfig::default()
            };
            let config = render.resolve(defaults)?;
            let mut renderer = WaveFieldRenderer::configure(config)?;
            let mut sink = TerminalSink::stdout().with_glyph(glyph);
            renderer.run_animation(Duration::from_millis(delay_ms), &mut sink)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
