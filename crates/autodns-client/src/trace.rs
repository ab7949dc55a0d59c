//! Observability hook for raw gateway exchanges.

use std::sync::Arc;
use std::time::Duration;

/// One completed request/response pair, handed to a [`TraceHook`].
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    /// Command code that was sent
    pub code: &'a str,
    /// Object type of the command, if any
    pub object_type: Option<&'a str>,
    /// Raw response body as received
    pub response: &'a str,
    /// Time from sending the document to having the full body
    pub elapsed: Duration,
}

/// Callback invoked with every raw response before it is interpreted.
pub type TraceHook = Arc<dyn Fn(&Exchange<'_>) + Send + Sync>;
