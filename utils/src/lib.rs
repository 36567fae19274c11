//! Shared utilities for the Gatehouse workspace.

pub mod version_info;
