//! Built-in recipes for `components/PokerBattleTable.tsx`

pub mod bet_buttons;
pub mod spectator_sync;
