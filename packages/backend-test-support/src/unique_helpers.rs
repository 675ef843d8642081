//! Ids that do not collide across tests sharing one directory or process.

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT: AtomicI64 = AtomicI64::new(1);

fn next() -> i64 {
    let pid = i64::from(std::process::id() % 100_000);
    pid * 1_000_000 + NEXT.fetch_add(1, Ordering::Relaxed)
}

/// A fresh group-chat id (negative, like real group chats).
///
/// ```
/// use backend_test_support::unique_helpers::unique_chat_id;
///
/// let a = unique_chat_id();
/// let b = unique_chat_id();
/// assert_ne!(a, b);
/// assert!(a < 0);
/// ```
pub fn unique_chat_id() -> i64 {
    -next()
}

/// A fresh positive user id.
pub fn unique_user_id() -> i64 {
    next()
}
