//! Shared utilities for the viewer core.

pub mod frame_timing;
