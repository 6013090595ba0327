#![deny(unsafe_code)]
//! CLI binary for the tonal palette generator.
//!
//! Subcommands:
//! - `palette <hex>` — print the 11-tone palette of a base color
//! - `sheet` — print every palette of a JSON sheet (or the default sheet)
//! - `hsl <hex>` — convert a hex color to HSL
//! - `hex <h> <s> <l>` — convert an HSL color to hex
//! - `tones` — print the tone table

mod config;
mod error;
mod render;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use tonal_palette_core::{
    hex_to_hsl, hsl_to_hex, HexColor, Hsl, Palette, TitledPalette, TONE_SPECS,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tonal-palette", about = "Tonal color palette generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug").
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 11-tone palette of a base color.
    Palette {
        /// Base color as "#rrggbb" or "rrggbb".
        hex: String,

        /// Title printed above the palette.
        #[arg(short, long, default_value = "Palette")]
        title: String,

        /// Paint a color block next to each tone.
        #[arg(long)]
        swatch: bool,
    },
    /// Print every palette of a sheet.
    Sheet {
        /// JSON sheet file; the built-in sheet is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Paint a color block next to each tone.
        #[arg(long)]
        swatch: bool,
    },
    /// Convert a hex color to HSL.
    Hsl {
        /// Color as "#rrggbb" or "rrggbb".
        hex: String,
    },
    /// Convert an HSL color to hex.
    #[command(allow_negative_numbers = true)]
    Hex {
        /// Hue in degrees; wraps modulo 360.
        h: f64,

        /// Saturation in percent (0-100).
        #[arg(value_parser = parse_percent)]
        s: f64,

        /// Lightness in percent (0-100).
        #[arg(value_parser = parse_percent)]
        l: f64,
    },
    /// Print the tone table.
    Tones,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0..=100"))
    }
}

fn print_palettes(palettes: &[TitledPalette], json: bool, swatch: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(palettes)?);
    } else {
        let blocks: Vec<String> = palettes
            .iter()
            .map(|p| render::palette_text(p, swatch))
            .collect();
        print!("{}", blocks.join("\n"));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Palette { hex, title, swatch } => {
            tracing::debug!(%hex, %title, "building palette");
            let base = HexColor::from_hex(&hex)?;
            let titled = TitledPalette {
                title,
                base,
                palette: Palette::from_base(base),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&titled)?);
            } else {
                print!("{}", render::palette_text(&titled, swatch));
            }
            tracing::info!(base = %base, "palette rendered");
        }
        Command::Sheet {
            config: path,
            swatch,
        } => {
            let sheet = config::load_sheet(path.as_deref())?;
            let palettes = sheet.render()?;
            print_palettes(&palettes, cli.json, swatch)?;
            tracing::info!(palettes = palettes.len(), "sheet rendered");
        }
        Command::Hsl { hex } => {
            let hsl = hex_to_hsl(&hex)?;
            tracing::debug!(%hex, %hsl, "converted to hsl");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&hsl)?);
            } else {
                println!("{hsl}");
            }
        }
        Command::Hex { h, s, l } => {
            let hex = hsl_to_hex(Hsl::new(h, s, l));
            tracing::debug!(h, s, l, %hex, "converted to hex");
            if cli.json {
                let info = serde_json::json!({ "hex": hex });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{hex}");
            }
        }
        Command::Tones => {
            if cli.json {
                let rows: Vec<serde_json::Value> = TONE_SPECS
                    .iter()
                    .map(|spec| {
                        serde_json::json!({
                            "key": spec.tone,
                            "saturation_delta": spec.saturation_delta,
                            "target_lightness": spec.target_lightness,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::tones_text());
            }
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. under a test harness) is harmless.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
