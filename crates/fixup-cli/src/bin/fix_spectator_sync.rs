//! Fixes spectator card and action sync in the battle table.

use fixup_cli::patch_cmd;
use fixup_patch::recipes::spectator_sync;
use std::process::ExitCode;

fn main() -> ExitCode {
    patch_cmd::main(
        &spectator_sync::recipe(),
        "fix-spectator-sync",
        "Sync spectator card and action state from the battle feed",
    )
}
