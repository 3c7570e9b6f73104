use tanks_core::{
    common::{
        environment::Environment,
        events::GameEvent,
        gamestate::{GamePhase, GameState},
        player::{Controls, PlayerSide},
    },
    config::GameConfig,
    utils::Vector2,
};

const FRAME_MS: f64 = 1000.0 / 60.0;
const BATTLE: Vector2 = Vector2 { x: 500.0, y: 500.0 };

fn idle() -> [Controls; 2] {
    [Controls::default(), Controls::default()]
}

/// Red keeps firing along its starting row at a parked blue tank until the
/// round ends, returning every event seen on the way
fn play_out_round(game: &mut GameState, mut now: f64) -> (Vec<GameEvent>, f64) {
    game.player_mut(PlayerSide::Blue).position = Vector2::new(400.0, 650.0);

    let mut events = Vec::new();
    for _ in 0..10_000 {
        if game.phase != GamePhase::Playing {
            break;
        }

        now += FRAME_MS;
        game.player_shoot(PlayerSide::Red);
        game.update(&idle(), now);
        events.extend(game.drain_events());
    }

    (events, now)
}

#[test]
fn red_wins_a_shooting_gallery_round() {
    let mut game = GameState::new(GameConfig::default(), 0.0);
    game.click(BATTLE, 0.0);
    assert_eq!(game.phase, GamePhase::Playing);

    let (events, _) = play_out_round(&mut game, 0.0);

    assert_eq!(game.winner(), Some(PlayerSide::Red));
    assert_eq!(game.player(PlayerSide::Blue).health, 0);
    assert_eq!(game.player(PlayerSide::Red).health, 100);

    let hits: Vec<u64> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::PlayerHit { points, .. } => Some(*points),
            _ => None,
        })
        .collect();

    // every bullet lands 25px short of the blue tank's center
    assert_eq!(hits, vec![25; 20]);
    assert_eq!(game.player(PlayerSide::Red).score, 500);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            winner: Some(PlayerSide::Red)
        })
    );
}

#[test]
fn nothing_happens_after_game_over_until_restart() {
    let mut game = GameState::new(GameConfig::default(), 0.0);
    game.click(BATTLE, 0.0);
    let (_, now) = play_out_round(&mut game, 0.0);

    let frozen = game.player(PlayerSide::Red).clone();
    game.player_shoot(PlayerSide::Red);
    game.update(
        &[
            Controls {
                forward: true,
                ..Controls::default()
            },
            Controls::default(),
        ],
        now + FRAME_MS,
    );

    assert_eq!(game.player(PlayerSide::Red), &frozen);
    assert!(game.drain_events().is_empty());

    // clicks outside the restart button are ignored
    game.click(Vector2::new(300.0, 300.0), now);
    game.click(Vector2::new(400.0, 500.0), now);
    assert!(matches!(game.phase, GamePhase::GameOver { .. }));
    assert!(game.player(PlayerSide::Red).score > 0);
}

#[test]
fn restart_resets_the_round_identically() {
    let config = GameConfig::default();
    let fresh = GameState::new(config.clone(), 0.0);

    let mut game = GameState::new(config.clone(), 0.0);
    game.click(BATTLE, 0.0);
    let (_, now) = play_out_round(&mut game, 0.0);
    assert!(matches!(game.phase, GamePhase::GameOver { .. }));

    game.click(Vector2::new(420.0, 500.0), now);
    assert_eq!(game.phase, GamePhase::Playing);
    assert_eq!(game.drain_events(), vec![GameEvent::RoundStarted]);

    for side in PlayerSide::ALL {
        let player = game.player(side);
        let start = fresh.player(side);

        assert_eq!(player.health, config.max_health);
        assert_eq!(player.ammo, config.max_ammo);
        assert_eq!(player.score, 0);
        assert_eq!(player.position, start.position);
        assert_eq!(player.rotation, start.rotation);
        assert_eq!(player.next_refill_ms, now + config.fire_rate_ms);
    }

    assert!(game.bullets.is_empty());
    assert!(game.explosions.is_empty());
    assert_eq!(game.environment, Environment::arena(&config));
    assert_eq!(game.environment, fresh.environment);
}

#[test]
fn long_sessions_keep_stats_in_range() {
    let config = GameConfig::default();
    let mut game = GameState::new(config.clone(), 0.0);
    game.click(BATTLE, 0.0);

    let mut now = 0.0;
    for frame in 0..2_000u32 {
        now += FRAME_MS;

        // both tanks spin and drive in circles while firing whenever they can
        let controls = Controls {
            forward: frame % 3 != 0,
            backward: frame % 7 == 0,
            rotate_left: frame % 5 == 0,
            rotate_right: frame % 2 == 0,
        };
        game.player_shoot(PlayerSide::Red);
        game.player_shoot(PlayerSide::Blue);
        game.update(&[controls, controls], now);

        for player in &game.players {
            assert!(player.health <= config.max_health);
            assert!(player.ammo <= config.max_ammo);
            assert!((0.0..360.0).contains(&player.rotation));

            let half = config.tank_size.width / 2.0;
            assert!(player.position.x >= half);
            assert!(player.position.x <= config.window_width - half);
        }

        if game.phase != GamePhase::Playing {
            break;
        }
    }
}
