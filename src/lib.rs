//! tickspan: a terminal app hosting a single reactive text field.
//!
//! The field starts as `"test"` and is restamped to `"test" + <unix millis>`
//! on every activation (Enter, space, `u`, or a click on the update control).
//! State lives in an explicit store; the render loop subscribes to it and
//! redraws whenever a change notification arrives.

pub mod args;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
