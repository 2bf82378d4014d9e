//! Exit status translation.

use crate::constants::exit_code;
use std::process::ExitStatus;

/// Convert a child's exit status into the code a shell would report.
///
/// A normal exit yields its code. On unix, death by signal `n` yields
/// `128 + n`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_code::SIGNAL_BASE + signal;
        }
    }

    exit_code::FAILURE
}
