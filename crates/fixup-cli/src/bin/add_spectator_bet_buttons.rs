//! Adds spectator bet buttons to the battle table.

use fixup_cli::patch_cmd;
use fixup_patch::recipes::bet_buttons;
use std::process::ExitCode;

fn main() -> ExitCode {
    patch_cmd::main(
        &bet_buttons::recipe(),
        "add-spectator-bet-buttons",
        "Add spectator bet buttons under both hands and lengthen the resolution delay",
    )
}
