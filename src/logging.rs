//! Logging facade.
//!
//! The derivation code never logs through a concrete backend directly. Instead
//! it uses the macros below, which forward to [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) depending on the enabled feature.
//! Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled every macro expands to nothing.
//!
//! ```ignore
//! use gpui_site_nav::{debug_log, error_log, trace_log, warn_log};
//!
//! trace_log!("Segmenting path '{}'", path);
//! debug_log!("Viewer signed in, {} menu items visible", count);
//! warn_log!("max_items {} is below the minimum, clamping", max_items);
//! error_log!("Site navigation is not initialised, ignoring '{}'", path);
//! ```

/// Emit a **trace**-level message (per-segment derivation detail).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level message (location and session changes).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level message (configuration that had to be corrected).
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level message (a call that had to be dropped).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
