//! # msm-estimate
//!
//! Estimate transition statistics from a discrete trajectory at a given
//! lag time.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  trajectory   │────▶│  count pairs   │────▶│  row-normalize   │
//!  │  (labels)     │     │  (x[t],x[t+τ]) │     │  (stochastic P)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Counting pairs `(x[t], x[t+τ])` over the sorted distinct labels yields a
//! square [`TransitionCounts`] whose total equals `N − τ`; dividing each row
//! by its sum yields the row-stochastic [`TransitionMatrix`]. Rows with a
//! zero count sum are handled by an explicit [`DegenerateRowPolicy`] rather
//! than silently dividing into NaN.
//!
//! # Quick start
//!
//! ```rust
//! use msm_traj::Trajectory;
//! use msm_estimate::{EstimateConfig, estimate};
//!
//! let traj = Trajectory::from_states(vec![1, 1, 2, 2, 1, 1]).unwrap();
//! let result = estimate(&traj, 1, &EstimateConfig::new()).unwrap();
//! assert_eq!(result.counts().total(), 5);
//! ```

mod config;
mod counts;
mod error;
mod estimator;
mod matrix;

pub use config::{DegenerateRowPolicy, EstimateConfig};
pub use counts::TransitionCounts;
pub use error::EstimateError;
pub use estimator::{Estimate, count_transitions, estimate, row_normalize};
pub use matrix::TransitionMatrix;
