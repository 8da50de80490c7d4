use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use tincture::{Adjustment, Brightness, Harmonies, Harmony, Hex, MixMode, Scale, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SWATCH_WIDTH: u32 = 80;
const SWATCH_HEIGHT: u32 = 60;
const GAP: u32 = 4;

#[derive(Parser)]
#[command(name = "tincture-swatches", about = "Print and render color palettes")]
struct Cli {
    /// JSON settings to start from
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Also render the palettes as rows of swatches into this PNG
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Every harmony family of a color
    Harmonies { base: Hex },
    /// Mix a color with another, one row per mix mode
    Mix {
        base: Hex,
        /// Defaults to the color from the settings
        color: Option<Hex>,
        /// Only mix in this mode
        #[arg(long)]
        mode: Option<MixMode>,
        /// Generate this many steps instead of a single mix
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        aperture: Option<f64>,
        #[arg(long, value_enum)]
        scale: Option<ScaleArg>,
    },
    /// Lighten and darken a color, one row per direction
    Brightness {
        base: Hex,
        /// Only move in this direction
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long, value_enum)]
        scale: Option<ScaleArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    Linear,
    Log,
}

impl From<ScaleArg> for Scale {
    fn from(val: ScaleArg) -> Self {
        match val {
            ScaleArg::Linear => Scale::Linear,
            ScaleArg::Log => Scale::Log,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Lighten,
    Darken,
}

impl From<DirectionArg> for Brightness {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Lighten => Brightness::Lighten,
            DirectionArg::Darken => Brightness::Darken,
        }
    }
}

/// A labeled sequence of colors, printed as one line and drawn as one row.
struct Row {
    label: String,
    colors: Vec<Hex>,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read settings from {}", path.display()))?;
    let settings = Settings::from_json(&text)
        .with_context(|| format!("invalid settings in {}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded settings");

    Ok(settings)
}

fn harmony_rows(base: Hex) -> Vec<Row> {
    let harmonies = Harmonies::of(base);

    let mut rows: Vec<Row> = Harmony::ALL
        .iter()
        .map(|&harmony| Row {
            label: format!("{harmony:?}").to_lowercase(),
            colors: harmonies.get(harmony).to_vec(),
        })
        .collect();
    rows.push(Row {
        label: "convergence".to_owned(),
        colors: harmonies.convergence,
    });

    rows
}

fn render(rows: &[Row], path: &Path) -> Result<()> {
    let columns = rows.iter().map(|row| row.colors.len()).max().unwrap_or(0) as u32;

    let width = (columns * (SWATCH_WIDTH + GAP) + GAP).max(1);
    let height = (rows.len() as u32 * (SWATCH_HEIGHT + GAP) + GAP).max(1);

    let mut img = RgbaImage::new(width, height);
    img.fill(255);

    for (y, row) in rows.iter().enumerate() {
        for (x, color) in row.colors.iter().enumerate() {
            let [r, g, b] = color.bytes();
            draw_filled_rect_mut(
                &mut img,
                Rect::at(
                    (GAP + x as u32 * (SWATCH_WIDTH + GAP)) as i32,
                    (GAP + y as u32 * (SWATCH_HEIGHT + GAP)) as i32,
                )
                .of_size(SWATCH_WIDTH, SWATCH_HEIGHT),
                Rgba([r, g, b, 255]),
            );
        }
    }

    img.save(path)
        .with_context(|| format!("could not write image to {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "rendered swatches");

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;

    let rows = match cli.command {
        Command::Harmonies { base } => harmony_rows(base),
        Command::Mix {
            base,
            color,
            mode,
            steps,
            aperture,
            scale,
        } => {
            if let Some(color) = color {
                settings.mix.color = color;
            }
            if let Some(steps) = steps {
                settings.mix.steps = steps;
                settings.mix.kind = Adjustment::Steps;
            }
            if let Some(aperture) = aperture {
                settings.mix.aperture = aperture;
            }
            if let Some(scale) = scale {
                settings.mix.scale = scale.into();
            }
            settings.validate()?;

            let modes = match mode {
                Some(mode) => vec![mode],
                None => MixMode::ALL.to_vec(),
            };

            modes
                .into_iter()
                .map(|mode| -> Result<Row> {
                    settings.mix.mode = mode;
                    Ok(Row {
                        label: mode.to_string(),
                        colors: settings.mix_palette(base)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        }
        Command::Brightness {
            base,
            direction,
            steps,
            scale,
        } => {
            if let Some(steps) = steps {
                settings.brightness.steps = steps;
                settings.brightness.kind = Adjustment::Steps;
            }
            if let Some(scale) = scale {
                settings.brightness.scale = scale.into();
            }
            settings.validate()?;

            let directions = match direction {
                Some(direction) => vec![Brightness::from(direction)],
                None => vec![Brightness::Lighten, Brightness::Darken],
            };

            directions
                .into_iter()
                .map(|direction| -> Result<Row> {
                    settings.brightness.mode = direction;
                    Ok(Row {
                        label: format!("{direction:?}").to_lowercase(),
                        colors: settings.brightness_palette(base)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    for row in &rows {
        let colors: Vec<String> = row.colors.iter().map(Hex::to_string).collect();
        println!("{:<20} {}", row.label, colors.join(" "));
    }

    if let Some(path) = cli.output.as_deref() {
        render(&rows, path)?;
    }

    Ok(())
}
