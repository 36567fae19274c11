use thiserror::Error;

/// Errors raised by misuse of the state registry.
///
/// These indicate a wiring bug (a state or command was never registered), not
/// a runtime condition, so accessors panic with them rather than returning
/// `Result` at every call site.
#[derive(Debug, Error)]
pub enum StateCtxError {
    #[error("state `{type_name}` is not registered in this StateCtx")]
    StateNotRegistered { type_name: &'static str },

    #[error("command `{type_name}` is not registered in this StateCtx")]
    CommandNotRegistered { type_name: &'static str },
}
