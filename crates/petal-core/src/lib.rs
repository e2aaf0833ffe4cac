//! Petal Core Library
//!
//! Design-token resolution and utility-class compilation for theme
//! configurations.
//!
//! ## Overview
//!
//! A theme configuration names colors, font stacks, spacing units and
//! animations. Petal validates the whole configuration once, producing an
//! immutable [`Theme`], and then expands utility classes such as `bg-gold`,
//! `font-heading` or `md:hover:bg-blush/80` into concrete CSS declarations.
//!
//! ## Components
//!
//! - [`TokenRegistry`]: tokens keyed by category and name
//! - [`AliasResolver`]: legacy names mapped to canonical tokens
//! - [`ClassNameCompiler`]: utility class grammar and expansion
//! - [`AnimationAssembler`]: animations bound to validated keyframes
//! - [`Stylesheet`]: custom properties, `@keyframes` and utility rules as CSS
//!
//! ## Quick Start
//!
//! ```no_run
//! use petal_core::Theme;
//!
//! fn main() -> Result<(), petal_core::ThemeError> {
//!     let theme = Theme::wedding()?;
//!
//!     let compiled = theme.compiler().compile("bg-gold/90")?;
//!     println!("{}", compiled.to_css());
//!
//!     let fade = theme.animations().resolve("fade-in")?;
//!     println!("{}", fade.keyframes_css());
//!
//!     let css = theme.stylesheet().with_classes("font-heading text-accent")?.render();
//!     println!("{}", css);
//!     Ok(())
//! }
//! ```

pub mod alias;
pub mod animation;
pub mod compiler;
pub mod config;
pub mod error;
pub mod registry;
pub mod stylesheet;
pub mod theme;
pub mod types;

// Re-exports
pub use alias::AliasResolver;
pub use animation::{
    AnimationAssembler, AnimationDefinition, FillMode, Iteration, Keyframe, TimingFunction,
};
pub use compiler::{ClassNameCompiler, CompiledUtility, Utility, Variant};
pub use config::ThemeConfig;
pub use error::{ThemeError, ThemeResult};
pub use registry::TokenRegistry;
pub use stylesheet::Stylesheet;
pub use theme::Theme;
pub use types::*;
