//! Call-site logging macros.
//!
//! Each macro takes anything that derefs to a [`LogContext`](crate::LogContext)
//! (a reference, an `Arc`, a guard's context), captures the enclosing
//! function and line, and formats lazily with `format_args!`.
//!
//! ```
//! use dbglog_core::{dbg_print, log_file, log_info, LogContext, LogLevel};
//!
//! let ctx = LogContext::default();
//! log_info!(ctx, "listening on {}", 8080);
//! dbg_print!(ctx, LogLevel::Debug, "cache size {}", 12);
//! log_file!(ctx, "audit: user {} logged in", "alice");
//! ```
//!
//! Building without the `output` feature turns every macro into a no-op. The
//! context, level and format arguments are still type-checked but nothing is
//! evaluated or written.

/// Whether the call-site macros were compiled in.
pub const OUTPUT_ENABLED: bool = cfg!(feature = "output");

/// Emit at an explicit level.
#[cfg(feature = "output")]
#[macro_export]
macro_rules! dbg_print {
    ($ctx:expr, $level:expr, $($arg:tt)+) => {
        $ctx.emit($level, $crate::callsite!(), ::std::format_args!($($arg)+))
    };
}

/// Emit at an explicit level (compiled out).
#[cfg(not(feature = "output"))]
#[macro_export]
macro_rules! dbg_print {
    ($ctx:expr, $level:expr, $($arg:tt)+) => {
        if false {
            let _: &$crate::LogContext = &$ctx;
            let _: $crate::LogLevel = $level;
            let _ = ::std::format_args!($($arg)+);
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::dbg_print!($ctx, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::dbg_print!($ctx, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::dbg_print!($ctx, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::dbg_print!($ctx, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emit at [`LogLevel::LogToFile`](crate::LogLevel::LogToFile).
#[macro_export]
macro_rules! log_file {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::dbg_print!($ctx, $crate::LogLevel::LogToFile, $($arg)+)
    };
}
