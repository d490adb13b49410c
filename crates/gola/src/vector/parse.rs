//! Parsing of the `[c0,c1,...]` display form.

use std::str::FromStr;

use crate::error::{Result, VectorError};

use super::Vector;

/// Parses the format produced by [`Vector`]'s [`Display`][std::fmt::Display] impl.
///
/// Whitespace around the brackets and around each component is ignored.
///
/// # Examples
///
/// ```
/// # use gola::*;
/// let v: Vector = "[1, 2.5,-3e2, 1e+06]".parse()?;
/// assert_eq!(v, vector![1, 2.5, -300, 1000000]);
/// assert_eq!(v.to_string().parse::<Vector>()?, v);
/// assert_eq!("[]".parse::<Vector>()?, vector![]);
/// assert!("[1,,2]".parse::<Vector>().is_err());
/// # Ok::<(), VectorError>(())
/// ```
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| VectorError::Parse(format!("expected `[...]`, got `{s}`")))?;

        if inner.trim().is_empty() {
            return Ok(Vector::zeros(0));
        }

        inner
            .split(',')
            .map(|component| {
                let component = component.trim();
                component.parse::<f64>().map_err(|e| {
                    VectorError::Parse(format!("invalid component `{component}`: {e}"))
                })
            })
            .collect()
    }
}
