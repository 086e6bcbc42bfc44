use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn hidden_cards_show_placeholder() {
    let game = PairingGame::deal(&content::MEMORY_ICONS, &mut StdRng::seed_from_u64(1));
    assert!((0..12).all(|i| card_face(&game, i) == HIDDEN_FACE));
    assert_eq!(card_face(&game, 99), HIDDEN_FACE);
}

#[test]
fn selected_card_shows_icon() {
    let mut game = PairingGame::deal(&content::MEMORY_ICONS, &mut StdRng::seed_from_u64(1));
    game.select(3);
    assert_eq!(card_face(&game, 3), game.cards()[3].icon);
    assert_eq!(card_face(&game, 4), HIDDEN_FACE);
}

// =============================================================
// Delayed check resolution
// =============================================================

/// One-pair deal with both cards up and the check pending.
fn last_pair_checking() -> PairingGame {
    let mut game = PairingGame::deal(&["🎂"], &mut StdRng::seed_from_u64(3));
    assert_eq!(game.select(0), None);
    assert!(game.select(1).is_some());
    game
}

#[test]
fn check_resolves_on_mounted_game() {
    let owner = Owner::new();
    let game = owner.with(|| RwSignal::new(last_pair_checking()));
    let snapshot = game.get_untracked();

    assert_eq!(finish_check(game, snapshot), Some(Outcome::Complete));
    assert!(game.with_untracked(PairingGame::is_complete));
}

#[test]
fn check_still_completes_after_panel_is_disposed() {
    let owner = Owner::new();
    let game = owner.with(|| RwSignal::new(last_pair_checking()));
    let snapshot = game.get_untracked();
    owner.cleanup();

    assert_eq!(finish_check(game, snapshot), Some(Outcome::Complete));
}

#[test]
fn check_for_replaced_deal_is_ignored() {
    let owner = Owner::new();
    let game = owner.with(|| RwSignal::new(last_pair_checking()));
    let snapshot = game.get_untracked();
    game.update(|g| g.reset(&mut StdRng::seed_from_u64(9)));

    assert_eq!(finish_check(game, snapshot), None);
    assert_eq!(game.with_untracked(PairingGame::matches), 0);
}
