//! Timing parameters and the `animation` shorthand

use std::fmt;
use std::str::FromStr;

use crate::error::{ThemeError, ThemeResult};

/// Easing curve applied between keyframes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TimingFunction {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
    CubicBezier(f64, f64, f64, f64),
}

impl FromStr for TimingFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(TimingFunction::Linear),
            "ease" => Ok(TimingFunction::Ease),
            "ease-in" => Ok(TimingFunction::EaseIn),
            "ease-out" => Ok(TimingFunction::EaseOut),
            "ease-in-out" => Ok(TimingFunction::EaseInOut),
            "step-start" => Ok(TimingFunction::StepStart),
            "step-end" => Ok(TimingFunction::StepEnd),
            _ => parse_cubic_bezier(s),
        }
    }
}

fn parse_cubic_bezier(s: &str) -> Result<TimingFunction, String> {
    let args = s
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| format!("unknown timing function '{}'", s))?;

    let points = args
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad cubic-bezier point in '{}': {}", s, e))?;
    if points.iter().any(|point| !point.is_finite()) {
        return Err(format!("cubic-bezier points must be finite: '{}'", s));
    }

    match points.as_slice() {
        &[x1, y1, x2, y2] => {
            // x coordinates must stay within the unit interval
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(format!("cubic-bezier x values must be in [0, 1]: '{}'", s));
            }
            Ok(TimingFunction::CubicBezier(x1, y1, x2, y2))
        }
        _ => Err(format!("cubic-bezier takes four numbers: '{}'", s)),
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Linear => f.write_str("linear"),
            TimingFunction::Ease => f.write_str("ease"),
            TimingFunction::EaseIn => f.write_str("ease-in"),
            TimingFunction::EaseOut => f.write_str("ease-out"),
            TimingFunction::EaseInOut => f.write_str("ease-in-out"),
            TimingFunction::StepStart => f.write_str("step-start"),
            TimingFunction::StepEnd => f.write_str("step-end"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// How many times an animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    Count(u32),
    Infinite,
}

impl Default for Iteration {
    fn default() -> Self {
        Iteration::Count(1)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteration::Count(n) => write!(f, "{}", n),
            Iteration::Infinite => f.write_str("infinite"),
        }
    }
}

/// Styles applied before and after the animation runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(FillMode::None),
            "forwards" => Ok(FillMode::Forwards),
            "backwards" => Ok(FillMode::Backwards),
            "both" => Ok(FillMode::Both),
            other => Err(format!("unknown fill mode '{}'", other)),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        })
    }
}

/// Parsed form of `<keyframes> <duration> [<delay>] [<timing>] [<count>] [<fill>]`
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationShorthand {
    pub keyframes_name: String,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub timing_function: TimingFunction,
    pub iteration: Iteration,
    pub fill_mode: FillMode,
}

impl AnimationShorthand {
    /// Parse a shorthand such as `fadeIn 0.8s ease-out forwards`.
    ///
    /// `animation` is the name the shorthand is bound to, used for errors.
    /// The keyframes name comes first; the remaining parts may appear in any
    /// order, with the first time value taken as the duration and the second
    /// as the delay.
    pub fn parse(animation: &str, shorthand: &str) -> ThemeResult<Self> {
        let parts = split_outside_parens(shorthand);
        let (keyframes_name, rest) = parts
            .split_first()
            .ok_or_else(|| ThemeError::invalid_value(animation, "empty animation shorthand"))?;

        if parse_time_ms(keyframes_name).is_some() {
            return Err(ThemeError::invalid_value(
                animation,
                format!("shorthand must start with a keyframes name, found '{}'", keyframes_name),
            ));
        }

        let mut duration_ms = None;
        let mut delay_ms = None;
        let mut timing_function = None;
        let mut iteration = None;
        let mut fill_mode = None;

        for part in rest {
            let duplicate = |what: &str| {
                ThemeError::invalid_value(animation, format!("{} given twice in '{}'", what, shorthand))
            };

            if let Some(ms) = parse_time_ms(part) {
                if duration_ms.is_none() {
                    duration_ms = Some(ms);
                } else if delay_ms.is_none() {
                    delay_ms = Some(ms);
                } else {
                    return Err(duplicate("time value"));
                }
            } else if let Ok(timing) = part.parse::<TimingFunction>() {
                if timing_function.replace(timing).is_some() {
                    return Err(duplicate("timing function"));
                }
            } else if let Ok(fill) = part.parse::<FillMode>() {
                if fill_mode.replace(fill).is_some() {
                    return Err(duplicate("fill mode"));
                }
            } else if let Some(count) = parse_iteration(part) {
                if iteration.replace(count).is_some() {
                    return Err(duplicate("iteration count"));
                }
            } else {
                return Err(ThemeError::invalid_value(
                    animation,
                    format!("unrecognized part '{}' in '{}'", part, shorthand),
                ));
            }
        }

        let duration_ms = duration_ms.ok_or_else(|| {
            ThemeError::invalid_value(animation, format!("missing duration in '{}'", shorthand))
        })?;

        Ok(Self {
            keyframes_name: keyframes_name.clone(),
            duration_ms,
            delay_ms: delay_ms.unwrap_or(0),
            timing_function: timing_function.unwrap_or_default(),
            iteration: iteration.unwrap_or_default(),
            fill_mode: fill_mode.unwrap_or_default(),
        })
    }
}

/// Parse `800ms` or `0.8s` into whole milliseconds
pub(crate) fn parse_time_ms(s: &str) -> Option<u32> {
    let (number, scale) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1000.0)
    } else {
        return None;
    };

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let ms = (value * scale).round();
    if ms > f64::from(u32::MAX) {
        return None;
    }
    Some(ms as u32)
}

fn parse_iteration(s: &str) -> Option<Iteration> {
    if s == "infinite" {
        return Some(Iteration::Infinite);
    }
    s.parse::<u32>().ok().map(Iteration::Count)
}

/// Split on whitespace that is not inside parentheses
fn split_outside_parens(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in s.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time_ms("800ms"), Some(800));
        assert_eq!(parse_time_ms("0.8s"), Some(800));
        assert_eq!(parse_time_ms("2s"), Some(2000));
        assert_eq!(parse_time_ms("ease"), None);
        assert_eq!(parse_time_ms("-1s"), None);
        assert_eq!(parse_time_ms("fadeIn"), None);
    }

    #[test]
    fn test_timing_function_roundtrip() {
        for text in ["linear", "ease", "ease-in", "ease-out", "ease-in-out", "step-start", "step-end"] {
            let timing: TimingFunction = text.parse().unwrap();
            assert_eq!(timing.to_string(), text);
        }

        let bezier: TimingFunction = "cubic-bezier(0.4, 0, 0.2, 1)".parse().unwrap();
        assert_eq!(bezier, TimingFunction::CubicBezier(0.4, 0.0, 0.2, 1.0));
        assert_eq!(bezier.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn test_bad_cubic_bezier() {
        assert!("cubic-bezier(0.4, 0, 0.2)".parse::<TimingFunction>().is_err());
        assert!("cubic-bezier(1.5, 0, 0.2, 1)".parse::<TimingFunction>().is_err());
        assert!("bounce".parse::<TimingFunction>().is_err());
        assert!("cubic-bezier(0, NaN, 1, inf)".parse::<TimingFunction>().is_err());
        assert!("cubic-bezier(0.4, 0, 0.2, -inf)".parse::<TimingFunction>().is_err());
        assert!(AnimationShorthand::parse("x", "fadeIn 1s cubic-bezier(0, NaN, 1, 1)").is_err());
    }

    #[test]
    fn test_parse_shorthand() {
        let parsed = AnimationShorthand::parse("fade-in", "fadeIn 0.8s ease-out forwards").unwrap();
        assert_eq!(parsed.keyframes_name, "fadeIn");
        assert_eq!(parsed.duration_ms, 800);
        assert_eq!(parsed.delay_ms, 0);
        assert_eq!(parsed.timing_function, TimingFunction::EaseOut);
        assert_eq!(parsed.iteration, Iteration::Count(1));
        assert_eq!(parsed.fill_mode, FillMode::Forwards);
    }

    #[test]
    fn test_parse_shorthand_with_bezier_and_infinite() {
        let parsed = AnimationShorthand::parse(
            "float",
            "float 6s cubic-bezier(0.4, 0, 0.2, 1) 200ms infinite",
        )
        .unwrap();
        assert_eq!(parsed.duration_ms, 6000);
        assert_eq!(parsed.delay_ms, 200);
        assert_eq!(
            parsed.timing_function,
            TimingFunction::CubicBezier(0.4, 0.0, 0.2, 1.0)
        );
        assert_eq!(parsed.iteration, Iteration::Infinite);
    }

    #[test]
    fn test_shorthand_defaults() {
        let parsed = AnimationShorthand::parse("pulse", "pulse 2s").unwrap();
        assert_eq!(parsed.timing_function, TimingFunction::Ease);
        assert_eq!(parsed.fill_mode, FillMode::None);
    }

    #[test]
    fn test_shorthand_errors() {
        assert!(AnimationShorthand::parse("x", "").is_err());
        assert!(AnimationShorthand::parse("x", "0.8s fadeIn").is_err());
        assert!(AnimationShorthand::parse("x", "fadeIn ease-out").is_err());
        assert!(AnimationShorthand::parse("x", "fadeIn 1s ease ease-in").is_err());
        assert!(AnimationShorthand::parse("x", "fadeIn 1s wobble").is_err());
    }
}
