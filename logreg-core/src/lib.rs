//! # logreg-core - Logistic Transforms and Threshold Neurons
//!
//! Building blocks for binary classification. There is no training loop,
//! optimizer or dataset handling here; these are the formulas.
//!
//! ## Modules
//!
//! - **capability**: member-name introspection (`HasMember::has_object`)
//! - **logistic**: odds, logit over a named transform, sigmoid
//! - **neuron**: McCulloch-Pitts threshold neuron with a weighted-sum scorer
//! - **config**: neuron configuration loaded from TOML
//!
//! ```
//! use logreg_core::{LogisticRegression, Neuron};
//!
//! let lr = LogisticRegression::new();
//! let log_odds = lr.logit(0.6, "odds").unwrap();
//! assert!((lr.sigmoid(log_odds) - 0.6).abs() < 1e-12);
//!
//! let n = Neuron::new();
//! assert_eq!(n.decide(&[1.0, 1.0, 0.0], &[0.25, 0.3, 0.1], 0.5).unwrap(), 1);
//! ```

pub mod error;
pub use error::{LogRegError, Result};

pub mod capability;
pub use capability::HasMember;

pub mod logistic;
pub use logistic::{odds, sigmoid, LogisticRegression, Transform, TransformFn};

pub mod neuron;
pub use neuron::{linear_algebra, Algorithm, Neuron, NeuronBuilder, ScorerFn, FIRE, REST};

pub mod config;
pub use config::{Decision, NeuronConfig};

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::capability::HasMember;
    pub use crate::config::{Decision, NeuronConfig};
    pub use crate::error::{LogRegError, Result};
    pub use crate::logistic::{LogisticRegression, Transform};
    pub use crate::neuron::{Algorithm, Neuron, NeuronBuilder};
}
