//! # Threshold Neuron
//!
//! McCulloch-Pitts style unit: scores an input vector against a weight
//! vector and fires when the score meets a threshold.
//!
//! The scoring algorithm is chosen once, at construction, by name. The
//! default is the weighted sum (`linear_algebra`). Extra scorers can be
//! registered through [`NeuronBuilder`] before the neuron is built.

use std::fmt;
use std::str::FromStr;

use crate::capability::{HasMember, INTROSPECTION_MEMBERS};
use crate::error::{LogRegError, Result};

/// Scoring function: (weights, inputs) -> score
pub type ScorerFn = fn(&[f64], &[f64]) -> Result<f64>;

/// Firing indicator returned by [`Neuron::decide`] when the threshold is met.
pub const FIRE: i8 = 1;

/// Firing indicator returned by [`Neuron::decide`] otherwise.
pub const REST: i8 = -1;

const TYPE_NAME: &str = "Neuron";

const BUILTIN_MEMBERS: [&str; 4] = ["algorithm", "decide", "decide_bias", "linear_algebra"];

fn is_builtin_member(name: &str) -> bool {
    INTROSPECTION_MEMBERS.contains(&name) || BUILTIN_MEMBERS.contains(&name)
}

/// Weighted sum of `w` and `x`: Σ w[i] * x[i]
///
/// No bias term. Fails when the vectors differ in length.
///
/// ```
/// use logreg_core::linear_algebra;
///
/// assert_eq!(linear_algebra(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]).unwrap(), 12.0);
/// assert!(linear_algebra(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn linear_algebra(w: &[f64], x: &[f64]) -> Result<f64> {
    if w.len() != x.len() {
        return Err(LogRegError::LengthMismatch {
            weights: w.len(),
            inputs: x.len(),
        });
    }

    Ok(w.iter().zip(x).fold(0.0, |sum, (wi, xi)| sum + wi * xi))
}

/// Built-in scoring algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Weighted sum (dot product) of weights and inputs
    #[default]
    LinearAlgebra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 1] = [Algorithm::LinearAlgebra];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LinearAlgebra => "linear_algebra",
        }
    }

    pub fn function(&self) -> ScorerFn {
        match self {
            Algorithm::LinearAlgebra => linear_algebra,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LogRegError;

    fn from_str(name: &str) -> Result<Self> {
        match Self::from_name(name) {
            Some(algorithm) => Ok(algorithm),
            None if is_builtin_member(name) => {
                Err(LogRegError::unsupported_member(name, TYPE_NAME))
            }
            None => Err(LogRegError::invalid_reference(name, TYPE_NAME)),
        }
    }
}

/// Collects extra named scorers, then builds a [`Neuron`] bound to one of
/// them (or to a built-in).
///
/// ```
/// use logreg_core::{HasMember, NeuronBuilder};
///
/// fn max_product(w: &[f64], x: &[f64]) -> logreg_core::Result<f64> {
///     Ok(w.iter().zip(x).map(|(a, b)| a * b).fold(f64::MIN, f64::max))
/// }
///
/// let neuron = NeuronBuilder::new()
///     .scorer("max_product", max_product)
///     .unwrap()
///     .build("max_product")
///     .unwrap();
/// assert!(neuron.has_object("max_product"));
/// assert_eq!(neuron.decide(&[1.0, 2.0], &[0.5, 0.1], 0.5).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeuronBuilder {
    extensions: Vec<(String, ScorerFn)>,
}

impl NeuronBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named scorer. Fails if the name is already a member.
    pub fn scorer(mut self, name: impl Into<String>, f: ScorerFn) -> Result<Self> {
        let name = name.into();
        let taken = is_builtin_member(&name)
            || self.extensions.iter().any(|(member, _)| *member == name);
        if taken {
            return Err(LogRegError::duplicate_member(&name, TYPE_NAME));
        }
        tracing::debug!(scorer = %name, "registered neuron scorer");
        self.extensions.push((name, f));
        Ok(self)
    }

    /// Build a neuron bound to the member named `algorithm`.
    pub fn build(self, algorithm: &str) -> Result<Neuron> {
        let mut neuron = self.build_default();
        neuron.bind(algorithm)?;
        Ok(neuron)
    }

    /// Build a neuron bound to the weighted-sum scorer.
    pub fn build_default(self) -> Neuron {
        let algorithm = Algorithm::default();
        Neuron {
            algorithm: algorithm.name().to_string(),
            scorer: algorithm.function(),
            extensions: self.extensions,
        }
    }
}

/// Artificial neuron as described by McCulloch and Pitts.
///
/// Holds one scoring algorithm, bound at construction and never rebound.
#[derive(Debug, Clone)]
pub struct Neuron {
    algorithm: String,
    scorer: ScorerFn,
    extensions: Vec<(String, ScorerFn)>,
}

impl Default for Neuron {
    fn default() -> Self {
        NeuronBuilder::new().build_default()
    }
}

impl Neuron {
    /// Neuron using the weighted-sum scorer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_algorithm(algorithm: Algorithm) -> Self {
        Neuron {
            algorithm: algorithm.name().to_string(),
            scorer: algorithm.function(),
            extensions: Vec::new(),
        }
    }

    /// Neuron bound to the member named `name`.
    ///
    /// Fails with [`LogRegError::InvalidReference`] if the neuron has no such
    /// member, or [`LogRegError::UnsupportedMember`] if the member is not a
    /// scorer.
    ///
    /// ```
    /// use logreg_core::{LogRegError, Neuron};
    ///
    /// assert!(Neuron::with_algorithm("linear_algebra").is_ok());
    /// assert!(matches!(
    ///     Neuron::with_algorithm("quadratic"),
    ///     Err(LogRegError::InvalidReference { .. })
    /// ));
    /// ```
    pub fn with_algorithm(name: &str) -> Result<Self> {
        NeuronBuilder::new().build(name)
    }

    fn bind(&mut self, name: &str) -> Result<()> {
        if !self.has_object(name) {
            return Err(LogRegError::invalid_reference(name, TYPE_NAME));
        }

        let scorer = match Algorithm::from_name(name) {
            Some(builtin) => builtin.function(),
            None => self
                .extensions
                .iter()
                .find(|(member, _)| member == name)
                .map(|(_, f)| *f)
                .ok_or_else(|| LogRegError::unsupported_member(name, TYPE_NAME))?,
        };

        tracing::debug!(algorithm = name, "bound neuron algorithm");
        self.algorithm = name.to_string();
        self.scorer = scorer;
        Ok(())
    }

    /// Name of the bound scoring algorithm.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Fire ([`FIRE`]) if the score of `x` under `w` reaches `t`, else
    /// [`REST`].
    ///
    /// ```
    /// use logreg_core::Neuron;
    ///
    /// let n = Neuron::new();
    /// assert_eq!(n.decide(&[1.0, 1.0, 0.0], &[0.25, 0.3, 0.1], 0.5).unwrap(), 1);
    /// ```
    pub fn decide(&self, w: &[f64], x: &[f64], t: f64) -> Result<i8> {
        if (self.scorer)(w, x)? >= t {
            return Ok(FIRE);
        }
        Ok(REST)
    }

    /// Subtract the threshold through a bias unit and compare against zero.
    ///
    /// Same decision as [`Neuron::decide`], reported as a bool.
    ///
    /// ```
    /// use logreg_core::Neuron;
    ///
    /// let n = Neuron::new();
    /// assert!(n.decide_bias(&[1.0, 1.0, 0.0], &[0.25, 0.3, 0.1], 0.5).unwrap());
    /// ```
    pub fn decide_bias(&self, w: &[f64], x: &[f64], t: f64) -> Result<bool> {
        Ok((self.scorer)(w, x)? + -1.0 * t >= 0.0)
    }

    /// See [`linear_algebra`].
    pub fn linear_algebra(&self, w: &[f64], x: &[f64]) -> Result<f64> {
        linear_algebra(w, x)
    }
}

impl HasMember for Neuron {
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
