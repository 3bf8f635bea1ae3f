use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};

use inkboard::config::Config;
use inkboard::draw::{BLACK, WHITE};
use inkboard::engine::Engine;
use inkboard::{script, util};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Pointer-driven raster drawing engine with scripted replay")]
struct Cli {
    /// Gesture script to replay against a fresh canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas size as WIDTHxHEIGHT, overriding the config file
    #[arg(long, value_name = "WxH")]
    size: Option<String>,

    /// Background color (name or #RRGGBB), overriding the config file
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,

    /// Write a documented default config to ~/.config/inkboard/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    let (width, height) = match &cli.size {
        Some(spec) => parse_size(spec)?,
        None => (config.canvas.width, config.canvas.height),
    };
    let background = match &cli.background {
        Some(spec) => {
            util::parse_color(spec).with_context(|| format!("unknown background color '{spec}'"))?
        }
        None => config.canvas.background.to_color(WHITE),
    };
    let color = config.tools.color.to_color(BLACK);

    let mut engine = Engine::new(width, height, background, color, config.tools.stroke_width);

    if let Some(path) = &cli.script {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        script::replay(&mut engine, &source)
            .with_context(|| format!("script {} failed", path.display()))?;
    }

    if let Some(path) = &cli.output {
        let bytes = engine.export_png().context("failed to encode PNG")?;
        fs::write(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!(
            "Wrote {}x{} canvas to {}",
            engine.canvas().width(),
            engine.canvas().height(),
            path.display()
        );
    }

    if cli.script.is_none() && cli.output.is_none() {
        // No work requested: show usage
        println!("inkboard: pointer-driven raster drawing engine");
        println!();
        println!("Usage:");
        println!("  inkboard --script draw.txt --output out.png   Replay a script, export a PNG");
        println!("  inkboard --init-config                        Write a documented default config");
        println!("  inkboard --help                               Show all options");
        println!();
        println!("Script commands (one per line, '#' starts a comment):");
        println!("  tool NAME            brush, eraser, line, rect, circle");
        println!("  color SPEC           named color or #RRGGBB");
        println!("  width N              stroke width in pixels (1-50)");
        println!("  down X Y             press at client coordinates");
        println!("  touch X Y [X Y ...]  touch-start; extra pairs are extra contacts");
        println!("  move X Y             drag to client coordinates");
        println!("  up | leave           release / leave the canvas");
        println!("  undo | clear         history controls");
        println!("  resize W H           resize the canvas, keeping content");
        println!("  origin X Y           canvas origin within the client area");
        println!("  export PATH          write the canvas as PNG");
    }

    Ok(())
}

/// Parses a `WIDTHxHEIGHT` size specification.
fn parse_size(spec: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = spec.split_once(['x', 'X']) else {
        bail!("invalid size '{spec}', expected WIDTHxHEIGHT");
    };
    let width: u32 = w
        .trim()
        .parse()
        .with_context(|| format!("invalid width '{w}'"))?;
    let height: u32 = h
        .trim()
        .parse()
        .with_context(|| format!("invalid height '{h}'"))?;
    if width == 0 || height == 0 {
        bail!("size dimensions must be positive");
    }
    Ok((width, height))
}
