//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the last text sent so `after()` hooks can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Message not meant for this handler; try the next one.
    Ignore,
    /// Handled; stop the chain and attach the reply text.
    Reply(String),
}
