//! Fatal error reporting at the process boundary
//!
//! Errors are split into user-actionable ones (a broken manifest, a bad config
//! file) whose own message is shown, and system errors (I/O) which are
//! reported under the operation that failed, with details at debug level.

/// Errors that can tell user-actionable failures apart from system failures
///
/// `user_message()` returns `None` for system errors. A user-actionable error
/// may also return `None` when its `Display` text is already the message to
/// show.
pub trait ContextualError: std::error::Error {
    /// True when the error carries a message the user can act on directly
    fn is_user_actionable(&self) -> bool;

    /// The message to show for user-actionable errors
    fn user_message(&self) -> Option<&str>;
}

/// Log `error` as fatal, choosing the detail level by error kind
///
/// # Examples
/// ```rust,no_run
/// # use plugin_version_sync::core::error_handling::log_error_with_context;
/// # use plugin_version_sync::sync::SyncError;
/// let err = SyncError::config("plugin-id must be a string");
/// log_error_with_context(&err, "Loading configuration");
/// // Logs: "FATAL: plugin-id must be a string"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::error!("FATAL: {}: {}", operation_context, user_msg)
        }
        _ => log::error!("FATAL: {}: {}", operation_context, error),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Text printed to stderr when the logger could not be started
pub fn fallback_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    format!("Error: {}: {}", operation_context, error)
}
