//! loadcheck — a one-shot probe for the system run-queue load average.
//!
//! Samples the 1/5/15-minute load averages, compares them against
//! warning/critical threshold triplets and renders a single
//! machine-parseable status line. Designed to be invoked once per check
//! cycle by an external scheduler; the exit code carries the result
//! (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
