//! faceswap-launcher CLI entry point.

#![allow(clippy::print_stderr)]

use std::error::Error as _;

fn main() {
    match faceswap_launcher::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(e.exit_code());
        }
    }
}
