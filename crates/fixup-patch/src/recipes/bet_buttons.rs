//! Spectator bet buttons and the longer resolution delay
//!
//! Adds a row of wager buttons under each hand on the battle table, shown
//! only in spectator mode, and stretches the resolution phase from 3s to 5s.

use crate::recipe::PatchRecipe;
use fixup_artifact::TextDelta;

/// Recipe name
pub const NAME: &str = "bet_buttons";

/// Printed after every run
pub const SUCCESS_MESSAGE: &str = "Added spectator bet buttons and increased resolution time!";

/// Wagers offered by each button row
pub const WAGER_AMOUNTS: [u32; 4] = [10, 25, 50, 100];

/// Delay token before the change
pub const OLD_DELAY: &str = "}, 3000);";

/// Delay token after the change
pub const NEW_DELAY: &str = "}, 5000);";

/// Last line of each hand grid; must directly precede the anchor
pub const HAND_GRID_CLOSE: &str = "                  </div>\n";

/// Closing tag of the opponent hand block
pub const OPPONENT_ANCHOR: &str = "                </div>\n\n                {/* CENTER - CARD BATTLE AREA */}";

/// Closing tag of the player hand block
pub const PLAYER_ANCHOR: &str = "                </div>\n\n                {/* BOOST ACTIONS */}";

/// One side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetSide {
    /// Comment title ("Opponent" / "Player")
    pub title: &'static str,
    /// `room` field holding the wallet to bet on
    pub address: &'static str,
    /// `room` field holding the display name
    pub username: &'static str,
    /// Tailwind colour family for the buttons
    pub color: &'static str,
}

/// Guest seat, shown above the battle area
pub const OPPONENT_SIDE: BetSide = BetSide {
    title: "Opponent",
    address: "guestAddress",
    username: "guestUsername",
    color: "red",
};

/// Host seat, shown above the boost actions
pub const PLAYER_SIDE: BetSide = BetSide {
    title: "Player",
    address: "hostAddress",
    username: "hostUsername",
    color: "blue",
};

/// JSX block rendering the bet buttons for `side`
///
/// Starts and ends with a blank line so it sits apart from the hand grid.
#[must_use]
pub fn bet_buttons_fragment(side: &BetSide) -> String {
    let amounts = WAGER_AMOUNTS
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let BetSide {
        title,
        address,
        username,
        color,
    } = side;

    format!(
        r#"
                  {{/* Spectator Bet Buttons - {title} Side */}}
                  {{isSpectatorMode && room?.{address} && (
                    <div className="flex gap-2 justify-center mt-3">
                      <div className="text-xs text-vintage-gold/70 mr-2 flex items-center">Bet on {{room.{username}}}:</div>
                      {{[{amounts}].map((amount) => (
                        <button
                          key={{amount}}
                          onClick={{() => handlePlaceBet(room.{address}!, amount)}}
                          disabled={{placingBet}}
                          className="bg-{color}-600 hover:bg-{color}-500 disabled:bg-gray-600 text-white font-bold rounded px-3 py-1.5 text-sm transition-all hover:scale-105 active:scale-95"
                        >
                          {{amount}}
                        </button>
                      ))}}
                    </div>
                  )}}

"#
    )
}

/// Build the recipe
#[must_use]
pub fn recipe() -> PatchRecipe {
    PatchRecipe::new(
        NAME,
        SUCCESS_MESSAGE,
        vec![
            TextDelta::insert_before(
                "opponent-bet-buttons",
                HAND_GRID_CLOSE,
                OPPONENT_ANCHOR,
                bet_buttons_fragment(&OPPONENT_SIDE),
            ),
            TextDelta::insert_before(
                "player-bet-buttons",
                HAND_GRID_CLOSE,
                PLAYER_ANCHOR,
                bet_buttons_fragment(&PLAYER_SIDE),
            ),
            TextDelta::replace_all("resolution-delay", OLD_DELAY, NEW_DELAY),
        ],
    )
}
