//! Fatal signalling of contract violations
//!
//! Every checked operation that cannot return a `Result` ends up here.

use crate::config::{config, ViolationPolicy};
use crate::error::RuntimeError;

/// Raise `err` according to the active [`ViolationPolicy`]
#[cold]
#[track_caller]
pub fn raise(err: RuntimeError) -> ! {
    log::error!(target: "faxc_runtime", "{} raised: {}", err.kind(), err);
    match config().violation {
        ViolationPolicy::Panic => panic!("{}", err),
        ViolationPolicy::Abort => exit_with(err),
    }
}

/// Print the diagnostic and exit with status 1, ignoring the policy
///
/// Used where unwinding is not possible, such as the C ABI.
#[cold]
pub fn terminate(err: RuntimeError) -> ! {
    log::error!(target: "faxc_runtime", "{} raised: {}", err.kind(), err);
    exit_with(err)
}

fn exit_with(err: RuntimeError) -> ! {
    eprintln!("Fax: panic - {}", err);
    std::process::exit(1);
}

/// Unwrap a checked result, raising the violation on `Err`
#[inline]
#[track_caller]
pub fn check<T>(result: Result<T, RuntimeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => raise(err),
    }
}
