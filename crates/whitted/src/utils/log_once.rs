//! Logging macros that only fire the first time a given call site is reached.
//!
//! Used for numerically degenerate situations that may happen once per pixel
//! and would otherwise flood the log.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        use std::sync::Once;
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            if log::log_enabled!(target: $target, $lvl) {
                log::log!(target: $target, $lvl, $($arg)+);
            }
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! error_once {
    (target: $target:expr, $($arg:tt)+) => ($crate::log_once!(target: $target, log::Level::Error, $($arg)+));
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Error, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => ($crate::log_once!(target: $target, log::Level::Warn, $($arg)+));
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Warn, $($arg)+));
}

pub use crate::{error_once, log_once, warn_once};
