//! Small browser helpers shared across components.

pub mod nav;
