use portfolio_site::particles::{rounded_square_path, Field, PathOp, Sprite};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

const W: f64 = 800.0;
const H: f64 = 600.0;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn field_keeps_sprite_count() {
    let mut rng = rng();
    for count in [0, 1, 20, 57] {
        let mut field = Field::new(count, W, H, &mut rng);
        for _ in 0..5_000 {
            field.step(&mut rng);
        }
        assert_eq!(field.len(), count);
    }
}

#[test]
fn spawned_sprites_stay_in_ranges() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let s = Sprite::spawn(W, H, &mut rng);
        assert!((0.0..W).contains(&s.x));
        assert!((0.0..H).contains(&s.y));
        assert!((10.0..40.0).contains(&s.size));
        assert!((0.2..0.7).contains(&s.speed));
        assert!((0.0..0.3).contains(&s.opacity));
        assert!(s.spin.abs() <= 0.01);
    }
}

#[test]
fn step_moves_up_and_spins() {
    let mut rng = rng();
    let mut field = Field::new(1, W, H, &mut rng);
    let before = field.sprites()[0].clone();
    field.step(&mut rng);
    let after = &field.sprites()[0];
    assert!((before.y - after.y - before.speed).abs() < 1e-9);
    assert_eq!(after.x, before.x);
    assert_eq!(after.size, before.size);
    let expected = (before.rotation + before.spin).rem_euclid(TAU);
    assert!((after.rotation - expected).abs() < 1e-9);
}

#[test]
fn rotation_accumulates_spin_and_stays_in_turn() {
    let mut rng = rng();
    let mut field = Field::new(20, W, H, &mut rng).with_respawn_margin(10_000.0);
    let start: Vec<Sprite> = field.sprites().to_vec();
    let frames = 500;
    for _ in 0..frames {
        field.step(&mut rng);
    }
    for (before, after) in start.iter().zip(field.sprites()) {
        assert!((0.0..TAU).contains(&after.rotation));
        let expected = (before.rotation + before.spin * frames as f64).rem_euclid(TAU);
        let drift = (after.rotation - expected).abs();
        assert!(drift < 1e-6 || (TAU - drift) < 1e-6, "drift {drift}");
    }
}

#[test]
fn sprite_leaving_top_respawns_below_bottom() {
    let mut rng = rng();
    let margin = 100.0;
    let mut field = Field::new(20, W, H, &mut rng).with_respawn_margin(margin);

    // A sprite needs at most (H + margin + 40) / 0.2 frames to cross the screen.
    let mut respawns = 0;
    let mut previous: Vec<f64> = field.sprites().iter().map(|s| s.y).collect();
    for _ in 0..4_000 {
        field.step(&mut rng);
        for (sprite, prev) in field.sprites().iter().zip(&previous) {
            if sprite.y > *prev {
                respawns += 1;
                assert_eq!(sprite.y, H + margin);
                assert!((0.0..W).contains(&sprite.x));
            }
            assert!(sprite.y >= -sprite.size - 1.0);
            assert!(sprite.y <= H + margin);
        }
        previous = field.sprites().iter().map(|s| s.y).collect();
    }
    assert!(respawns >= 20, "every sprite should wrap at least once");
}

#[test]
fn resize_affects_later_respawns() {
    let mut rng = rng();
    let mut field = Field::new(5, W, H, &mut rng).with_respawn_margin(0.0);
    field.resize(300.0, 200.0);
    assert_eq!(field.size(), (300.0, 200.0));
    for _ in 0..5_000 {
        field.step(&mut rng);
    }
    for sprite in field.sprites() {
        assert!(sprite.x < 300.0);
        assert!(sprite.y <= 200.0);
    }
}

#[test]
fn rounded_square_is_closed_and_symmetric() {
    let path = rounded_square_path(20.0);
    let PathOp::MoveTo(x0, y0) = path[0] else {
        panic!("path must start with a move");
    };
    assert_eq!((x0, y0), (-6.0, -10.0));
    let PathOp::ArcTo { x2, y2, radius, .. } = path[8] else {
        panic!("path must end on a corner arc");
    };
    assert_eq!((x2, y2), (x0, y0));
    assert_eq!(radius, 4.0);
    let arcs = path.iter().filter(|op| matches!(op, PathOp::ArcTo { .. })).count();
    assert_eq!(arcs, 4);
}
