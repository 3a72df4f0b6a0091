//! Property tests for placement and the physics step

use glam::DVec2;
use proptest::prelude::*;

use duck_sort::sim::{self, Bounds, Duck, Sfc32, SpawnParams, TickInput};
use duck_sort::{PhysicsParams, Session, SessionPhase, Settings, start_session};

fn spawn(seed: i32, pieces: usize, colors: u32) -> Vec<Duck> {
    let params = SpawnParams {
        piece_count: pieces,
        color_count: colors,
        bounds: Bounds::default(),
        radius: duck_sort::consts::DUCK_RADIUS,
        max_attempts: duck_sort::consts::MAX_PLACEMENT_ATTEMPTS,
    };
    sim::spawn_ducks(&params, &mut Sfc32::new(seed)).unwrap()
}

fn pointer_strategy() -> impl Strategy<Value = Option<(f64, f64)>> {
    prop::option::of((0.0..800.0f64, 0.0..600.0f64))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn placement_is_deterministic(seed in any::<i32>(), pieces in 4usize..=50, colors in 2u32..=10) {
        let a = spawn(seed, pieces, colors);
        let b = spawn(seed, pieces, colors);
        prop_assert_eq!(a.len(), pieces);
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.pos.x.to_bits(), y.pos.x.to_bits());
            prop_assert_eq!(x.pos.y.to_bits(), y.pos.y.to_bits());
            prop_assert_eq!(x.color, y.color);
        }
    }

    #[test]
    fn placement_never_overlaps(seed in any::<i32>(), pieces in 4usize..=50) {
        let ducks = spawn(seed, pieces, 3);
        for i in 0..ducks.len() {
            for j in (i + 1)..ducks.len() {
                prop_assert!(ducks[i].distance_to(&ducks[j]) >= 40.0);
            }
        }
    }

    #[test]
    fn integration_caps_speed(
        vels in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1..20)
    ) {
        let params = PhysicsParams::default();
        let mut ducks: Vec<Duck> = vels
            .iter()
            .enumerate()
            .map(|(i, &(vx, vy))| {
                let mut d = Duck::new(
                    DVec2::new(100.0 + i as f64 * 30.0, 300.0),
                    duck_sort::palette::DuckColor(0),
                    20.0,
                );
                d.vel = DVec2::new(vx, vy);
                d
            })
            .collect();
        sim::integrate(&mut ducks, &params);
        for d in &ducks {
            prop_assert!(d.speed() <= params.max_speed + 1e-9);
        }
    }

    #[test]
    fn ducks_stay_on_board(
        seed in any::<i32>(),
        pieces in 4usize..=40,
        pointers in prop::collection::vec(pointer_strategy(), 1..120)
    ) {
        let params = PhysicsParams::default();
        let bounds = Bounds::default();
        let mut ducks = spawn(seed, pieces, 4);
        for p in pointers {
            let input = TickInput { pointer: p.map(|(x, y)| DVec2::new(x, y)) };
            sim::step(&mut ducks, &input, &bounds, &params);
            for d in &ducks {
                prop_assert!(d.is_inside(&bounds), "duck escaped: {:?}", d.pos);
                prop_assert!(d.pos.is_finite() && d.vel.is_finite());
            }
        }
    }

    #[test]
    fn step_is_deterministic(
        seed in any::<i32>(),
        pointers in prop::collection::vec(pointer_strategy(), 1..60)
    ) {
        let params = PhysicsParams::default();
        let bounds = Bounds::default();
        let mut a = spawn(seed, 16, 4);
        let mut b = a.clone();
        for p in pointers {
            let input = TickInput { pointer: p.map(|(x, y)| DVec2::new(x, y)) };
            sim::step(&mut a, &input, &bounds, &params);
            sim::step(&mut b, &input, &bounds, &params);
        }
        prop_assert_eq!(a, b);
    }
}

#[test]
fn seed_42_scenario() {
    let session = start_session("42", 8, 3).unwrap();
    let colors: Vec<&str> = session.ducks().iter().map(|d| d.color.name()).collect();
    assert_eq!(
        colors,
        vec!["red", "blue", "green", "red", "blue", "green", "red", "blue"]
    );
}

#[test]
fn won_board_stays_sorted() {
    // Wide cluster radius so any reasonable stirring ends in a win
    let mut settings = Settings::with_counts(6, 2);
    settings.physics.cluster_radius = 2000.0;
    let mut session = Session::new("3", settings).unwrap();

    let outcome = session.tick_default(None);
    assert_eq!(outcome.phase, SessionPhase::Won);
    let radius = session.settings().physics.cluster_radius;
    for _ in 0..50 {
        let outcome = session.tick_default(Some(DVec2::new(400.0, 300.0)));
        assert_eq!(outcome.phase, SessionPhase::Won);
        assert!(sim::is_sorted(outcome.ducks, radius));
    }
}

#[test]
fn stirring_keeps_degenerate_board_running() {
    let mut session = start_session("11", 6, 6).unwrap();
    for i in 0..500 {
        let angle = i as f64 * 0.05;
        let pointer = DVec2::new(400.0 + 200.0 * angle.cos(), 300.0 + 150.0 * angle.sin());
        let outcome = session.tick_default(Some(pointer));
        assert_ne!(outcome.phase, SessionPhase::Won);
    }
    assert!(session.result().is_none());
}
