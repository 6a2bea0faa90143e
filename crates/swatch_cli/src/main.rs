//! Swatch CLI - inspect theme documents
//!
//! Lists the themes a document defines and prints any value a theme resolves
//! for a key, so authors can check inheritance and indirection without running
//! the app that consumes the theme.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{CliConfig, DocumentFormat};
use std::fs;
use std::path::{Path, PathBuf};
use swatch_theme::{standard_color, standard_color_names, Color, SizeAdjustment, Theme, ThemeLoader};
use tracing_subscriber::EnvFilter;

/// Inspect Swatch theme documents
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(about = "Inspect Swatch theme documents and resolved styles")]
#[command(version)]
struct Args {
    /// Configuration file, or directory containing swatch.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Force the document format instead of inferring it from the extension
    #[arg(long, global = true)]
    format: Option<DocumentFormat>,

    /// Log resolution details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the themes a document defines
    Themes {
        /// Theme document
        document: PathBuf,
    },

    /// List the standard colors usable as `standardColors.<name>`
    Colors,

    /// Resolve one key in a theme
    Get {
        /// Theme document
        document: PathBuf,

        /// What to resolve the key as
        #[arg(value_enum)]
        kind: Kind,

        /// Dotted key path
        key: String,

        /// Theme to resolve in; defaults to the configured or default theme
        #[arg(short, long)]
        theme: Option<String>,

        /// Font size adjustment for font, label, and navbar lookups
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        adjust: f32,

        /// Treat --adjust as a percentage of the size
        #[arg(long)]
        proportional: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    String,
    Bool,
    Integer,
    Float,
    Color,
    Font,
    Point,
    Size,
    Insets,
    View,
    Label,
    Navbar,
    Border,
    Animation,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("swatch_theme=trace,debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(&args.config)?;
    let format = args.format.or(config.format);

    match args.command {
        Command::Themes { document } => {
            let loader = load_document(&document, format, &config)?;
            for name in loader.theme_names() {
                let theme = loader.require(name)?;
                match theme.parent() {
                    Some(parent) => println!("{name} (inherits {})", parent.name()),
                    None => println!("{name}"),
                }
            }
        }
        Command::Colors => {
            for name in standard_color_names() {
                if let Some(color) = standard_color(name) {
                    println!("{name:<28} {}", hex_string(color));
                }
            }
        }
        Command::Get {
            document,
            kind,
            key,
            theme,
            adjust,
            proportional,
        } => {
            let loader = load_document(&document, format, &config)?;
            let name = theme
                .or_else(|| config.theme.clone())
                .unwrap_or_else(|| loader.config().default_theme.clone());
            let theme = loader.require(&name)?;
            let adjustment = if proportional {
                SizeAdjustment::Proportional(adjust)
            } else {
                SizeAdjustment::Absolute(adjust)
            };
            print_resolved(theme, kind, &key, adjustment)?;
        }
    }

    Ok(())
}

fn load_document(
    path: &Path,
    format: Option<DocumentFormat>,
    config: &CliConfig,
) -> Result<ThemeLoader> {
    let format = format
        .or_else(|| DocumentFormat::from_path(path))
        .with_context(|| {
            format!(
                "Cannot tell the format of {}; pass --format toml or --format json",
                path.display()
            )
        })?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let loader = match format {
        DocumentFormat::Toml => ThemeLoader::from_toml_str(&content, config.loader.clone()),
        DocumentFormat::Json => ThemeLoader::from_json_str(&content, config.loader.clone()),
    }
    .with_context(|| format!("Failed to load themes from {}", path.display()))?;

    tracing::debug!(document = %path.display(), themes = loader.len(), "document loaded");
    Ok(loader)
}

fn print_resolved(theme: &Theme, kind: Kind, key: &str, adjustment: SizeAdjustment) -> Result<()> {
    match kind {
        Kind::String => println!("{:#?}", theme.string(key)),
        Kind::Bool => println!("{:#?}", theme.bool(key)),
        Kind::Integer => println!("{:#?}", theme.integer(key)),
        Kind::Float => println!("{:#?}", theme.float(key)),
        Kind::Color => println!("{:#?}", theme.color(key)),
        Kind::Font => println!("{:#?}", theme.font_with_adjustment(key, adjustment)),
        Kind::Point => println!("{:#?}", theme.point(key)),
        Kind::Size => println!("{:#?}", theme.size(key)),
        Kind::Insets => println!("{:#?}", theme.edge_insets(key)),
        Kind::View => println!("{:#?}", required(theme.view_specifier(key), "view", key)?),
        Kind::Label => println!(
            "{:#?}",
            required(theme.text_label_specifier_with_adjustment(key, adjustment), "label", key)?
        ),
        Kind::Navbar => println!(
            "{:#?}",
            required(
                theme.navigation_bar_specifier_with_adjustment(key, adjustment),
                "navigation bar",
                key
            )?
        ),
        Kind::Border => println!(
            "{:#?}",
            required(theme.dashed_border_specifier(key), "dashed border", key)?
        ),
        Kind::Animation => println!(
            "{:#?}",
            required(theme.animation_specifier(key), "animation", key)?
        ),
    }
    Ok(())
}

/// `#RRGGBBAA` form of a color
fn hex_string(color: Color) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a)
    )
}

fn required<T>(specifier: Option<T>, what: &str, key: &str) -> Result<T> {
    specifier.with_context(|| format!("No {what} specifier found at {key:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_strings_include_alpha() {
        assert_eq!(hex_string(Color::RED), "#FF0000FF");
        assert_eq!(hex_string(Color::TRANSPARENT), "#00000000");
    }

    #[test]
    fn every_standard_color_name_resolves() {
        let names: Vec<_> = standard_color_names().collect();
        assert!(names.contains(&"red"));
        for name in names {
            assert!(standard_color(name).is_some(), "{name} has no color");
        }
    }
}
