//! Round plugin - scoring clicks, the countdown and restarts.

use bevy::prelude::*;

use super::scoreboard::Scoreboard;
use crate::board::HoleLayout;
use crate::core::{FrameSet, GameConfig, GameState, PointerDown, WhackOutcome, ZombieExpired};
use crate::zombies::{SpawnScheduler, ZombieManager};

/// Round plugin - turns clicks into score and ends the round on time.
pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Scoreboard>()
            .add_systems(
                OnEnter(GameState::Playing),
                start_round
                    .run_if(resource_exists::<ZombieManager>)
                    .run_if(resource_exists::<HoleLayout>),
            )
            // Clicks are resolved against the targets as they were last drawn
            .add_systems(
                Update,
                (
                    restart_on_key,
                    resolve_whacks,
                    count_expired_as_misses,
                    tick_round_timer,
                )
                    .chain()
                    .in_set(FrameSet::Resolve)
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_exists::<ZombieManager>)
                    .run_if(resource_exists::<HoleLayout>),
            );
    }
}

/// Clear the board, restart the clock and put the first target in hole 0.
pub fn reset_round(
    now: std::time::Duration,
    config: &GameConfig,
    scoreboard: &mut Scoreboard,
    manager: &mut ZombieManager,
    scheduler: &mut SpawnScheduler,
    layout: &HoleLayout,
) {
    *scoreboard = Scoreboard::new(config.round_seconds);
    scoreboard.reset(now);
    manager.clear();
    scheduler.reset();

    if let Some(center) = layout.center(0) {
        manager.spawn_in_slot(0, center, config.zombie.size);
    }
}

/// Drop clicks and expiries that belong to whatever came before the round.
fn discard_stale_events(
    pointer_events: &mut Events<PointerDown>,
    expired_events: &mut Events<ZombieExpired>,
) {
    pointer_events.clear();
    expired_events.clear();
}

fn start_round(
    time: Res<Time>,
    mut pointer_events: ResMut<Events<PointerDown>>,
    mut expired_events: ResMut<Events<ZombieExpired>>,
    config: Res<GameConfig>,
    mut scoreboard: ResMut<Scoreboard>,
    mut manager: ResMut<ZombieManager>,
    mut scheduler: ResMut<SpawnScheduler>,
    layout: Res<HoleLayout>,
) {
    discard_stale_events(&mut pointer_events, &mut expired_events);
    reset_round(
        time.elapsed(),
        &config,
        &mut scoreboard,
        &mut manager,
        &mut scheduler,
        &layout,
    );
    info!(
        "Round started: {}s on {} holes",
        config.round_seconds,
        layout.len()
    );
}

fn restart_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut pointer_events: ResMut<Events<PointerDown>>,
    mut expired_events: ResMut<Events<ZombieExpired>>,
    config: Res<GameConfig>,
    mut scoreboard: ResMut<Scoreboard>,
    mut manager: ResMut<ZombieManager>,
    mut scheduler: ResMut<SpawnScheduler>,
    layout: Res<HoleLayout>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    discard_stale_events(&mut pointer_events, &mut expired_events);
    reset_round(
        time.elapsed(),
        &config,
        &mut scoreboard,
        &mut manager,
        &mut scheduler,
        &layout,
    );
    info!("Round restarted");
}

/// Answer every click with exactly one hit or miss, in arrival order.
fn resolve_whacks(
    mut pointer_events: EventReader<PointerDown>,
    config: Res<GameConfig>,
    mut manager: ResMut<ZombieManager>,
    mut scoreboard: ResMut<Scoreboard>,
    mut outcomes: EventWriter<WhackOutcome>,
) {
    for event in pointer_events.read() {
        let position = event.position;
        if manager.handle_click(position) {
            scoreboard.increase_score(config.score_per_hit);
            outcomes.send(WhackOutcome::Hit { position });
        } else {
            scoreboard.increase_misses();
            outcomes.send(WhackOutcome::Miss { position });
        }
    }
}

fn count_expired_as_misses(
    mut expired_events: EventReader<ZombieExpired>,
    config: Res<GameConfig>,
    mut scoreboard: ResMut<Scoreboard>,
) {
    for _ in expired_events.read() {
        if config.expiry_counts_as_miss {
            scoreboard.increase_misses();
        }
    }
}

fn tick_round_timer(
    time: Res<Time>,
    mut scoreboard: ResMut<Scoreboard>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if scoreboard.update(time.elapsed()) {
        return;
    }
    info!(
        "Round over: score {}, {} hits, {} misses",
        scoreboard.score(),
        scoreboard.hits(),
        scoreboard.misses()
    );
    next_state.set(GameState::GameOver);
}
