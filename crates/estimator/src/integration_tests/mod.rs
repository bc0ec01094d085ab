//! Integration tests driving the calculator through `TestCalculator`.
//!
//! Each test spins up a headless Bevy App with `EstimatorPlugin` and checks
//! what a front-end would observe after sending events.

mod scenario_tests;
