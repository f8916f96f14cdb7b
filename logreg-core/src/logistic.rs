//! # Logistic Transforms
//!
//! Scalar transforms used by logistic regression for binary classification.
//!
//! ## Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | `odds` | p / (1 - p) |
//! | `logit` | ln of a named transform of p (canonically odds) |
//! | `sigmoid` | 1 / (1 + e^(-z)) |
//!
//! ## Implementation Notes
//!
//! No clamping or overflow guarding anywhere. `odds(1.0)` is `inf`, the log
//! of a non-positive transform result is `-inf` or `NaN`, and `sigmoid` of a
//! very negative `z` is `0.0` once `e^(-z)` overflows.

use std::fmt;
use std::str::FromStr;

use crate::capability::{HasMember, INTROSPECTION_MEMBERS};
use crate::error::{LogRegError, Result};

/// Euler's number, written out to the literal the sigmoid is defined with.
#[allow(clippy::excessive_precision)]
pub const E: f64 = 2.7182818284590452353602874713527;

/// Single-argument transform of a probability or real value.
pub type TransformFn = fn(f64) -> f64;

const TYPE_NAME: &str = "LogisticRegression";

/// Members every `LogisticRegression` exposes, besides the introspection ones.
const BUILTIN_MEMBERS: [&str; 6] = [
    "odds",
    "logit",
    "logit_with",
    "sigmoid",
    "transform",
    "with_transform",
];

fn is_builtin_member(name: &str) -> bool {
    INTROSPECTION_MEMBERS.contains(&name) || BUILTIN_MEMBERS.contains(&name)
}

/// Odds: ratio of p to its complement.
///
/// Less than 1 when p < 0.5, exactly 1 at 0.5, greater than 1 above.
///
/// ```
/// use logreg_core::odds;
///
/// assert_eq!((odds(0.49) * 1000.0).round() / 1000.0, 0.961);
/// assert_eq!(odds(0.5), 1.0);
/// assert_eq!((odds(0.51) * 1000.0).round() / 1000.0, 1.041);
/// ```
#[inline]
pub fn odds(p: f64) -> f64 {
    p / (1.0 - p)
}

/// Logistic sigmoid: 1 / (1 + e^(-z))
///
/// Maps a real value into (0, 1) with the intercept at exactly 0.5.
///
/// ```
/// use logreg_core::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert_eq!((sigmoid(2.0) * 1000.0).round() / 1000.0, 0.881);
/// ```
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + E.powf(-z))
}

/// Built-in transforms that `logit` can select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Odds,
    Sigmoid,
}

impl Transform {
    pub const ALL: [Transform; 2] = [Transform::Odds, Transform::Sigmoid];

    /// Member name this transform is looked up by.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Odds => "odds",
            Transform::Sigmoid => "sigmoid",
        }
    }

    pub fn function(&self) -> TransformFn {
        match self {
            Transform::Odds => odds,
            Transform::Sigmoid => sigmoid,
        }
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        (self.function())(value)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = LogRegError;

    fn from_str(name: &str) -> Result<Self> {
        match Self::from_name(name) {
            Some(transform) => Ok(transform),
            None if is_builtin_member(name) => {
                Err(LogRegError::unsupported_member(name, TYPE_NAME))
            }
            None => Err(LogRegError::invalid_reference(name, TYPE_NAME)),
        }
    }
}

/// Logistic transform library.
///
/// Stateless apart from any extra transforms registered with
/// [`LogisticRegression::with_transform`]; those become members and are
/// reachable through [`LogisticRegression::logit`] by name.
#[derive(Debug, Clone, Default)]
pub struct LogisticRegression {
    extensions: Vec<(String, TransformFn)>,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extra named transform.
    ///
    /// Fails if `name` is already a member.
    ///
    /// ```
    /// use logreg_core::{HasMember, LogisticRegression};
    ///
    /// let lr = LogisticRegression::new()
    ///     .with_transform("identity", |p| p)
    ///     .unwrap();
    /// assert!(lr.has_object("identity"));
    /// assert_eq!(lr.logit(1.0, "identity").unwrap(), 0.0);
    /// ```
    pub fn with_transform(mut self, name: impl Into<String>, f: TransformFn) -> Result<Self> {
        let name = name.into();
        if self.has_object(&name) {
            return Err(LogRegError::duplicate_member(&name, TYPE_NAME));
        }
        tracing::debug!(transform = %name, "registered logistic transform");
        self.extensions.push((name, f));
        Ok(self)
    }

    /// See [`odds`].
    pub fn odds(&self, p: f64) -> f64 {
        odds(p)
    }

    /// See [`sigmoid`].
    pub fn sigmoid(&self, z: f64) -> f64 {
        sigmoid(z)
    }

    /// Resolve a member name to a callable transform.
    pub fn transform(&self, name: &str) -> Result<TransformFn> {
        if !self.has_object(name) {
            return Err(LogRegError::invalid_reference(name, TYPE_NAME));
        }

        if let Some(builtin) = Transform::from_name(name) {
            return Ok(builtin.function());
        }

        self.extensions
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, f)| *f)
            .ok_or_else(|| LogRegError::unsupported_member(name, TYPE_NAME))
    }

    /// Logit: natural logarithm of the transform named `f` applied to `p`.
    ///
    /// With `f = "odds"` this is the log-odds. Fails if `f` is not a member,
    /// or names a member that is not a single-argument transform.
    ///
    /// ```
    /// use logreg_core::LogisticRegression;
    ///
    /// let lr = LogisticRegression::new();
    /// let value = lr.logit(0.6, "odds").unwrap();
    /// assert_eq!((value * 1000.0).round() / 1000.0, 0.405);
    /// assert!(lr.logit(0.6, "evens").is_err());
    /// ```
    pub fn logit(&self, p: f64, f: &str) -> Result<f64> {
        let transform = self.transform(f)?;
        tracing::trace!(transform = f, p, "logit");
        Ok(transform(p).ln())
    }

    /// Logit over an already-selected built-in transform.
    pub fn logit_with(&self, p: f64, transform: Transform) -> f64 {
        transform.apply(p).ln()
    }
}

impl HasMember for LogisticRegression {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn members(&self) -> Vec<&str> {
        INTROSPECTION_MEMBERS
            .iter()
            .chain(BUILTIN_MEMBERS.iter())
            .copied()
            .chain(self.extensions.iter().map(|(name, _)| name.as_str()))
            .collect()
    }
}
