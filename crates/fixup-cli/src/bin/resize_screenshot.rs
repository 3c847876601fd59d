//! Resizes the store screenshot to 1200x800.

use std::process::ExitCode;

fn main() -> ExitCode {
    fixup_cli::resize_cmd::main()
}
