//! Live formula text and value labels.
//!
//! The formula is produced as a small TeX expression, e.g.
//!
//! ```text
//! P(\theta) = 0.00 + \frac{1.00 - 0.00}{1 + e^{-1.0(\theta - 0.0)}}
//! ```
//!
//! [`tex_to_unicode`] turns that subset back into plain readable text for
//! surfaces without a typesetting engine.

use thiserror::Error;

use crate::data::state::ParamKey;
use crate::model::ModelParameters;

/// Options passed to a math surface with every formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathOptions {
    pub display_mode: bool,
    /// Swallow render errors instead of reporting them to the caller.
    pub fail_silently: bool,
}

impl Default for MathOptions {
    fn default() -> Self {
        Self {
            display_mode: true,
            fail_silently: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathRenderError {
    #[error("unbalanced braces in expression")]
    UnbalancedBraces,
    #[error("expression ended where an argument was expected")]
    UnexpectedEnd,
    #[error("unknown command \\{0}")]
    UnknownCommand(String),
}

/// Fixed-point formatting that never prints a negative zero.
pub fn fixed(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Display text for a parameter value: one decimal for `a`/`b`, two for `c`/`d`.
pub fn format_param(key: ParamKey, value: f64) -> String {
    fixed(value, key.display_decimals())
}

/// TeX form of `P(θ) = c + (d − c) / (1 + e^(−a(θ − b)))` with the current values.
///
/// Negative `a` and `b` are parenthesised so the exponent never reads
/// `--1.0` or `θ - -1.0`.
pub fn format_formula(params: &ModelParameters) -> String {
    let a = format_param(ParamKey::A, params.a);
    let b = format_param(ParamKey::B, params.b);
    let c = format_param(ParamKey::C, params.c);
    let d = format_param(ParamKey::D, params.d);
    let a = if a.starts_with('-') { format!("({a})") } else { a };
    let b = if b.starts_with('-') { format!("({b})") } else { b };
    format!(r"P(\theta) = {c} + \frac{{{d} - {c}}}{{1 + e^{{-{a}(\theta - {b})}}}}")
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Render the TeX subset used by [`format_formula`] as Unicode text.
///
/// Supported: groups, `^`, `\frac`, `\theta`, `\cdot`, `\,` and `\;`.
pub fn tex_to_unicode(tex: &str) -> Result<String, MathRenderError> {
    let mut it = tex.chars().peekable();
    sequence(&mut it, false)
}

fn sequence(it: &mut Chars<'_>, in_group: bool) -> Result<String, MathRenderError> {
    let mut out = String::new();
    loop {
        match it.next() {
            None if in_group => return Err(MathRenderError::UnbalancedBraces),
            None => return Ok(out),
            Some('}') if in_group => return Ok(out),
            Some('}') => return Err(MathRenderError::UnbalancedBraces),
            Some('{') => out.push_str(&sequence(it, true)?),
            Some('\\') => out.push_str(&command(it)?),
            Some('^') => {
                let exp = argument(it)?;
                out.push('^');
                out.push_str(&wrap(&exp));
            }
            Some(c) => out.push(c),
        }
    }
}

fn argument(it: &mut Chars<'_>) -> Result<String, MathRenderError> {
    while it.peek().is_some_and(|c| c.is_whitespace()) {
        it.next();
    }
    match it.next() {
        Some('{') => sequence(it, true),
        Some('\\') => command(it),
        Some('}') => Err(MathRenderError::UnbalancedBraces),
        Some(c) => Ok(c.to_string()),
        None => Err(MathRenderError::UnexpectedEnd),
    }
}

fn command(it: &mut Chars<'_>) -> Result<String, MathRenderError> {
    let mut name = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_alphabetic() {
            break;
        }
        name.push(c);
        it.next();
    }
    if name.is_empty() {
        return match it.next() {
            Some(',') | Some(';') | Some(' ') => Ok(" ".to_string()),
            Some(c @ ('{' | '}' | '\\')) => Ok(c.to_string()),
            Some(c) => Err(MathRenderError::UnknownCommand(c.to_string())),
            None => Err(MathRenderError::UnexpectedEnd),
        };
    }
    match name.as_str() {
        "theta" => Ok("θ".to_string()),
        "cdot" => Ok("·".to_string()),
        "frac" => {
            let num = argument(it)?;
            let den = argument(it)?;
            Ok(format!("{} / {}", wrap(&num), wrap(&den)))
        }
        _ => Err(MathRenderError::UnknownCommand(name)),
    }
}

/// Parenthesise anything that is not a single atom.
fn wrap(s: &str) -> String {
    let atom = !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '.');
    if atom {
        s.to_string()
    } else {
        format!("({s})")
    }
}
