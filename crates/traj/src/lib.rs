//! # msm-traj
//!
//! Load discretized 1-D trajectories for Markov state model estimation.
//!
//! A trajectory is an ordered sequence of integer microstate labels drawn
//! from a finite alphabet. The on-disk format is a single-column CSV
//! (one label per line, no header), optionally gzip-compressed. This crate
//! bridges that file format into the immutable [`Trajectory`] type the
//! estimation crates consume.

mod error;
mod reader;
mod trajectory;

pub use error::TrajError;
pub use reader::{ReaderConfig, read_trajectory};
pub use trajectory::Trajectory;
