//! Free logging functions routed through the global registry.
//!
//! Each function attributes its record to the calling file. The `f`
//! variants take pre-captured `format_args!`; the `debugf!`, `infof!` and
//! `errorf!` macros are the usual way to reach them.

use std::fmt;
use std::panic::Location;

use super::registry::current;
use crate::context::Context;
use crate::error::LogError;

#[track_caller]
pub fn debugc(ctx: &Context, message: &str) {
    current().debug_at(Location::caller().file(), ctx, &|| message.to_owned());
}

#[track_caller]
pub fn infoc(ctx: &Context, message: &str) {
    current().info_at(Location::caller().file(), ctx, &|| message.to_owned());
}

/// Log `message` at error level and return it as an error.
#[track_caller]
pub fn errorc(ctx: &Context, message: &str) -> LogError {
    current().error_at(Location::caller().file(), ctx, &|| message.to_owned())
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    debugf_from(Location::caller().file(), args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    infof_from(Location::caller().file(), args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) -> LogError {
    errorf_from(Location::caller().file(), args)
}

#[doc(hidden)]
pub fn debugf_from(logger: &str, args: fmt::Arguments<'_>) {
    current().debug_at(logger, &Context::background(), &|| args.to_string());
}

#[doc(hidden)]
pub fn infof_from(logger: &str, args: fmt::Arguments<'_>) {
    current().info_at(logger, &Context::background(), &|| args.to_string());
}

#[doc(hidden)]
pub fn errorf_from(logger: &str, args: fmt::Arguments<'_>) -> LogError {
    current().error_at(logger, &Context::background(), &|| args.to_string())
}
