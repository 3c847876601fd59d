//! Spectator view sync
//!
//! The game-state effect only mirrors the other seat's card and action.
//! Spectators have no seat, so both sides are mirrored for them instead.

use crate::recipe::PatchRecipe;
use fixup_artifact::TextDelta;

/// Recipe name
pub const NAME: &str = "spectator_sync";

/// Printed after every run
pub const SUCCESS_MESSAGE: &str = "Fixed spectator card and action sync!";

/// Selected-card sync before the change
pub const OLD_CARD_SYNC: &str = r"      // Sync opponent's selected card (only show after they select)
      if (isHost && gs.guestSelectedCard) {
        setOpponentSelectedCard(gs.guestSelectedCard);
      } else if (!isHost && gs.hostSelectedCard) {
        setOpponentSelectedCard(gs.hostSelectedCard);
      }";

/// Selected-card sync with the spectator branch first
pub const NEW_CARD_SYNC: &str = r"      // Sync opponent's selected card (only show after they select)
      if (isSpectatorMode) {
        // Spectators see both cards
        setPlayerSelectedCard(gs.hostSelectedCard);
        setOpponentSelectedCard(gs.guestSelectedCard);
      } else if (isHost && gs.guestSelectedCard) {
        setOpponentSelectedCard(gs.guestSelectedCard);
      } else if (!isHost && gs.hostSelectedCard) {
        setOpponentSelectedCard(gs.hostSelectedCard);
      }";

/// Action sync before the change
pub const OLD_ACTION_SYNC: &str = r"      // Sync opponent's action
      if (isHost && gs.guestAction) {
        setOpponentAction(gs.guestAction as CardAction);
      } else if (!isHost && gs.hostAction) {
        setOpponentAction(gs.hostAction as CardAction);
      }";

/// Action sync with the spectator branch first
pub const NEW_ACTION_SYNC: &str = r"      // Sync opponent's action
      if (isSpectatorMode) {
        // Spectators see both actions
        setPlayerAction(gs.hostAction as CardAction);
        setOpponentAction(gs.guestAction as CardAction);
      } else if (isHost && gs.guestAction) {
        setOpponentAction(gs.guestAction as CardAction);
      } else if (!isHost && gs.hostAction) {
        setOpponentAction(gs.hostAction as CardAction);
      }";

/// Build the recipe
#[must_use]
pub fn recipe() -> PatchRecipe {
    PatchRecipe::new(
        NAME,
        SUCCESS_MESSAGE,
        vec![
            TextDelta::replace_first("card-sync", OLD_CARD_SYNC, NEW_CARD_SYNC),
            TextDelta::replace_first("action-sync", OLD_ACTION_SYNC, NEW_ACTION_SYNC),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blocks_do_not_contain_old_anchors() {
        assert!(!NEW_CARD_SYNC.contains(OLD_CARD_SYNC));
        assert!(!NEW_ACTION_SYNC.contains(OLD_ACTION_SYNC));
    }

    #[test]
    fn spectator_branch_leads() {
        for block in [NEW_CARD_SYNC, NEW_ACTION_SYNC] {
            let spectator = block.find("if (isSpectatorMode)").unwrap();
            let host = block.find("isHost &&").unwrap();
            assert!(spectator < host);
        }
    }

    #[test]
    fn new_blocks_keep_old_branches() {
        let (_, card_tail) = OLD_CARD_SYNC.split_once("if (isHost").unwrap();
        let (_, action_tail) = OLD_ACTION_SYNC.split_once("if (isHost").unwrap();
        assert!(NEW_CARD_SYNC.ends_with(card_tail));
        assert!(NEW_ACTION_SYNC.ends_with(action_tail));
    }
}
