//! Formatted logging macros.

/// Log a formatted message at debug level with an empty context.
///
/// Arguments are only formatted if the installed sink enables debug.
///
/// ```
/// ctxlog::debugf!("Some {} message", "log");
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::dispatch::api::debugf_from(::core::file!(), ::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at info level with an empty context.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::dispatch::api::infof_from(::core::file!(), ::core::format_args!($($arg)+))
    };
}

/// Log a formatted message at error level and evaluate to a
/// [`LogError`](crate::LogError) carrying the logged message.
///
/// ```
/// fn load() -> Result<(), ctxlog::LogError> {
///     Err(ctxlog::errorf!("missing {}", "config"))
/// }
/// assert!(load().is_err());
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::dispatch::api::errorf_from(::core::file!(), ::core::format_args!($($arg)+))
    };
}
