//! Petal CLI
//!
//! Thin wrapper around petal-core for build-time theme validation and CSS
//! generation.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the bundled wedding theme
//! petal check
//!
//! # Validate a custom theme file
//! petal --config theme.json check
//!
//! # List tokens, optionally for one category
//! petal tokens --category color
//!
//! # Compile utility classes to CSS rules
//! petal compile bg-gold bg-gold/90 md:hover:text-blush
//!
//! # Show an animation and its keyframes
//! petal animation fade-in
//!
//! # Render a stylesheet with custom properties, keyframes and utilities
//! petal css --class "bg-ivory font-heading" --output theme.css
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use petal_core::{Theme, TokenCategory};
use tracing::debug;

/// Petal - design tokens to CSS
#[derive(Parser)]
#[command(name = "petal")]
#[command(version = "0.1.0")]
#[command(about = "Petal - design tokens to CSS")]
#[command(
    long_about = "Validates a design-token theme and expands utility classes into CSS declarations, custom properties and keyframes."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Theme configuration file (default: bundled wedding theme)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the theme and print a summary
    Check,

    /// List tokens and aliases
    Tokens {
        /// Only list one category (color, font, spacing, animation)
        #[arg(short = 'k', long, value_parser = parse_category)]
        category: Option<TokenCategory>,
    },

    /// Compile utility classes to CSS rules
    Compile {
        /// Utility classes (e.g. bg-gold, bg-gold/90, hover:text-blush)
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Show an animation definition and its keyframes
    Animation {
        /// Animation name (e.g. fade-in)
        name: String,
    },

    /// Render a stylesheet
    Css {
        /// Utility classes to include (repeatable, whitespace separated)
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let theme = load_theme(cli.config.as_deref())?;

    match cli.command {
        Commands::Check => {
            let registry = theme.registry();

            println!("Theme OK: {}", theme_source(cli.config.as_deref()));
            println!();
            println!("  Colors: {}", registry.count(TokenCategory::Color));
            println!("  Fonts: {}", registry.count(TokenCategory::Font));
            println!("  Spacing: {}", registry.count(TokenCategory::Spacing));
            println!("  Animations: {}", registry.count(TokenCategory::Animation));
            println!("  Aliases: {}", theme.aliases().len());
        }

        Commands::Tokens { category } => {
            let categories = match category {
                Some(category) => vec![category],
                None => TokenCategory::ALL.to_vec(),
            };

            for category in categories {
                let tokens: Vec<_> = theme.registry().iter(category).collect();
                if tokens.is_empty() {
                    continue;
                }
                println!("{} ({}):", category, tokens.len());
                for token in tokens {
                    println!("  {:<14} {}", token.name, token.value.to_css_value());
                }
                println!();
            }

            if category.is_none() && !theme.aliases().is_empty() {
                println!("aliases ({}):", theme.aliases().len());
                for (alias, canonical) in theme.aliases().iter() {
                    println!("  {:<14} -> {}", alias, canonical);
                }
            }
        }

        Commands::Compile { classes } => {
            let compiler = theme.compiler();
            let rules = classes
                .iter()
                .flat_map(|arg| arg.split_whitespace())
                .map(|class| compiler.compile(class))
                .collect::<Result<Vec<_>, _>>()?;

            debug!(count = rules.len(), "Compiled utilities");
            let css: Vec<String> = rules.iter().map(|rule| rule.to_css()).collect();
            print!("{}", css.join("\n"));
        }

        Commands::Animation { name } => {
            let animation = theme.animations().resolve(&name)?;

            println!("Animation: {}", animation.name);
            println!("  Keyframes: {}", animation.keyframes_name);
            println!("  Duration: {}ms", animation.duration_ms);
            if animation.delay_ms > 0 {
                println!("  Delay: {}ms", animation.delay_ms);
            }
            println!("  Timing: {}", animation.timing_function);
            println!("  Iteration: {}", animation.iteration);
            println!("  Fill mode: {}", animation.fill_mode);
            println!("  CSS: animation: {};", animation.to_css_value());
            println!();
            print!("{}", animation.keyframes_css());
        }

        Commands::Css { classes, output } => {
            let stylesheet = theme.stylesheet().with_classes(&classes.join(" "))?;
            let css = stylesheet.render();

            match output {
                Some(path) => {
                    std::fs::write(&path, &css)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", css.len(), path.display());
                }
                None => print!("{}", css),
            }
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so generated CSS on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load the configured theme, or the bundled one
fn load_theme(config: Option<&Path>) -> Result<Theme> {
    match config {
        Some(path) => Theme::from_path(path)
            .with_context(|| format!("Failed to load theme from {}", path.display())),
        None => Theme::wedding().context("Bundled wedding theme is invalid"),
    }
}

fn theme_source(config: Option<&Path>) -> String {
    config
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled wedding theme".to_string())
}

/// Parse a category name for `--category`
fn parse_category(s: &str) -> Result<TokenCategory, String> {
    s.parse()
}
