//! Named animations bound to keyframe sequences and timing parameters
//!
//! Configuration declares animations in two groups: `animation` maps a
//! utility name to a CSS shorthand (`"fade-in": "fadeIn 0.8s ease-out"`) and
//! `keyframes` maps the keyframes name to its rules. The assembler joins the
//! two into an [`AnimationDefinition`], validating the keyframe sequence, and
//! later resolves definitions by name from a built [`Theme`].

mod keyframe;
mod timing;

pub use keyframe::{keyframes_from_rules, validate_sequence, CssValue, Keyframe, KeyframeRules};
pub use timing::{AnimationShorthand, FillMode, Iteration, TimingFunction};

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;
use crate::types::TokenCategory;

/// A validated animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDefinition {
    /// Utility name (`fade-in`)
    pub name: String,
    /// Name of the `@keyframes` block (`fadeIn`)
    pub keyframes_name: String,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub timing_function: TimingFunction,
    pub iteration: Iteration,
    pub fill_mode: FillMode,
    pub keyframes: Vec<Keyframe>,
}

impl AnimationDefinition {
    /// Build a definition whose keyframes block shares the animation's name.
    ///
    /// # Errors
    ///
    /// `ThemeError::InvalidKeyframeSequence` if the keyframes do not run from
    /// 0% to 100% in non-decreasing order.
    pub fn new(
        name: impl Into<String>,
        duration_ms: u32,
        timing_function: TimingFunction,
        keyframes: Vec<Keyframe>,
    ) -> ThemeResult<Self> {
        let name = name.into();
        validate_sequence(&name, &keyframes)?;
        Ok(Self {
            keyframes_name: name.clone(),
            name,
            duration_ms,
            delay_ms: 0,
            timing_function,
            iteration: Iteration::default(),
            fill_mode: FillMode::default(),
            keyframes,
        })
    }

    pub fn with_keyframes_name(mut self, keyframes_name: impl Into<String>) -> Self {
        self.keyframes_name = keyframes_name.into();
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_iteration(mut self, iteration: Iteration) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Value of the `animation` declaration, omitting defaults
    pub fn to_css_value(&self) -> String {
        let mut parts = vec![
            self.keyframes_name.clone(),
            format!("{}ms", self.duration_ms),
            self.timing_function.to_string(),
        ];
        if self.delay_ms > 0 {
            parts.push(format!("{}ms", self.delay_ms));
        }
        if self.iteration != Iteration::default() {
            parts.push(self.iteration.to_string());
        }
        if self.fill_mode != FillMode::None {
            parts.push(self.fill_mode.to_string());
        }
        parts.join(" ")
    }

    /// The `@keyframes` block for this animation
    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.keyframes_name);
        for keyframe in &self.keyframes {
            css.push_str("  ");
            css.push_str(&keyframe.to_css());
            css.push('\n');
        }
        css.push_str("}\n");
        css
    }
}

/// Binds animation names to keyframes and resolves them from a theme
#[derive(Debug, Clone, Copy)]
pub struct AnimationAssembler<'t> {
    theme: &'t Theme,
}

impl<'t> AnimationAssembler<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// Build the definition for `name` from its shorthand and the keyframes
    /// table of the configuration.
    ///
    /// # Errors
    ///
    /// - `ThemeError::InvalidValue` if the shorthand is malformed
    /// - `ThemeError::UnknownAnimation` if the shorthand names keyframes that
    ///   are not declared
    /// - `ThemeError::InvalidKeyframeSequence` if the keyframes are invalid
    pub fn assemble(
        name: &str,
        shorthand: &str,
        keyframes: &BTreeMap<String, KeyframeRules>,
    ) -> ThemeResult<AnimationDefinition> {
        let parsed = AnimationShorthand::parse(name, shorthand)?;
        let rules = keyframes
            .get(&parsed.keyframes_name)
            .ok_or_else(|| ThemeError::UnknownAnimation(parsed.keyframes_name.clone()))?;

        let sequence = keyframes_from_rules(name, rules)?;
        let definition = AnimationDefinition::new(
            name,
            parsed.duration_ms,
            parsed.timing_function,
            sequence,
        )?
        .with_keyframes_name(parsed.keyframes_name)
        .with_delay(parsed.delay_ms)
        .with_iteration(parsed.iteration)
        .with_fill_mode(parsed.fill_mode);

        debug!(
            animation = name,
            keyframes = definition.keyframes.len(),
            duration_ms = definition.duration_ms,
            "Assembled animation"
        );
        Ok(definition)
    }

    /// Definition bound to `name`, following aliases.
    ///
    /// # Errors
    ///
    /// `ThemeError::UnknownAnimation` if no animation has that name.
    pub fn resolve(&self, name: &str) -> ThemeResult<&'t AnimationDefinition> {
        self.theme
            .lookup(TokenCategory::Animation, name)
            .ok()
            .and_then(|value| value.as_animation())
            .ok_or_else(|| ThemeError::UnknownAnimation(name.to_string()))
    }

    /// All animation definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &'t AnimationDefinition> + 't {
        self.theme
            .registry()
            .iter(TokenCategory::Animation)
            .filter_map(|token| token.value.as_animation())
    }
}
