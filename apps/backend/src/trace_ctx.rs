//! Task-local trace id for the request being served.
//!
//! `RequestTrace` runs each request inside [`with_trace_id`]; error responses
//! read it back through [`trace_id`] so problem documents carry the same id
//! as the `x-request-id` header. Only the HTTP layer touches this module.

use std::future::Future;

use tokio::task_local;

/// Returned when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Drive `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F>(trace_id: String, future: F) -> F::Output
where
    F: Future,
{
    TRACE_ID.scope(trace_id, future).await
}
