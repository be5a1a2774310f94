//! Platform-agnostic plumbing shared by the localization and theme layers.

pub mod config;
pub mod platform;
pub mod storage;
pub mod timing;
