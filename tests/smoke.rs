mod common;

use bevy::prelude::*;

use whack_a_zombie::board::{BoardPiece, HoleLayout};
use whack_a_zombie::core::{Difficulty, GameConfig, GameState};
use whack_a_zombie::round::Scoreboard;
use whack_a_zombie::ui::{DifficultyLabel, HammerCursor, HudRoot, MainMenuUi};
use whack_a_zombie::zombies::{ZombieManager, ZombieState};

use common::*;

#[test]
fn boots_into_main_menu() {
    let mut app = app_headless(GameConfig::default());
    boot(&mut app);

    assert_eq!(count::<MainMenuUi>(&mut app), 1);
    assert_eq!(count::<HammerCursor>(&mut app), 1);
    assert_eq!(count::<BoardPiece>(&mut app), 0);

    let label = app
        .world_mut()
        .query_filtered::<&Text, With<DifficultyLabel>>()
        .single(app.world())
        .0
        .clone();
    assert_eq!(label, "Easy");
}

#[test]
fn starting_a_round_builds_board_and_first_zombie() {
    let mut app = app_headless(seeded_config());
    start_round(&mut app);

    assert_eq!(count::<MainMenuUi>(&mut app), 0);
    assert_eq!(count::<HudRoot>(&mut app), 1);

    let layout = app.world().resource::<HoleLayout>().clone();
    assert_eq!(layout.len(), 6);
    // 16 x 12 tiles plus 6 holes, plus whatever grass was scattered
    assert!(count::<BoardPiece>(&mut app) >= 16 * 12 + 6);

    let manager = app.world().resource::<ZombieManager>();
    let first = manager.alive().next().unwrap();
    assert_eq!(first.slot(), Some(0));
    assert_eq!(Some(first.position()), layout.center(0));
    assert_eq!(first.state(), ZombieState::Spawning);

    assert_eq!(app.world().resource::<Scoreboard>().time_remaining(), 20);
}

#[test]
fn difficulty_picks_hole_count() {
    let mut app = app_headless(seeded_config());
    boot(&mut app);
    app.insert_resource(Difficulty::Hard);
    go_to(&mut app, GameState::Playing);

    assert_eq!(app.world().resource::<HoleLayout>().len(), 12);
}

#[test]
fn returning_to_menu_clears_the_board() {
    let mut app = app_headless(seeded_config());
    start_round(&mut app);
    advance(&mut app, 3);

    go_to(&mut app, GameState::MainMenu);

    assert_eq!(count::<BoardPiece>(&mut app), 0);
    assert_eq!(count::<HudRoot>(&mut app), 0);
    assert_eq!(count::<whack_a_zombie::zombies::ZombieSprite>(&mut app), 0);
    assert_eq!(count::<MainMenuUi>(&mut app), 1);
}
