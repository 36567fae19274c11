//! User directory domain: model, wire parsing, list state, and the edit
//! workflow.
//!
//! - `model`: user records and second-factor normalization
//! - `api`: wire types and response parsing for the `/admin/users` endpoints
//! - `state`: the fetched list and its refresh bookkeeping
//! - `workflow`: the edit dialog state machine (dirty tracking, validation,
//!   exit confirmation)
//! - `workflow_commands`: commands the UI dispatches into the workflow

pub mod api;
pub mod model;
pub mod state;
pub mod workflow;
pub mod workflow_commands;
