//! Decorative sprite field behind the hero section.
//!
//! Sprites are plain records; [`Field`] advances them once per animation frame
//! and the canvas layer draws them from [`rounded_square_path`].

use std::f64::consts::TAU;

use rand::Rng;

const MIN_SIZE: f64 = 10.0;
const MAX_SIZE: f64 = 40.0;
const MIN_SPEED: f64 = 0.2;
const MAX_SPEED: f64 = 0.7;
const MAX_OPACITY: f64 = 0.3;
const MAX_SPIN: f64 = 0.01;
/// Corner radius as a fraction of the side length.
const CORNER_RATIO: f64 = 0.2;

pub const STROKE_STYLE: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Pixels moved upward per frame.
    pub speed: f64,
    pub opacity: f64,
    pub rotation: f64,
    /// Radians per frame, either direction.
    pub spin: f64,
}

impl Sprite {
    /// A fresh sprite anywhere on a `width` x `height` surface.
    pub fn spawn<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * width.max(0.0),
            y: rng.gen::<f64>() * height.max(0.0),
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
            opacity: rng.gen::<f64>() * MAX_OPACITY,
            rotation: rng.gen::<f64>() * TAU,
            spin: rng.gen_range(-MAX_SPIN..MAX_SPIN),
        }
    }

    /// Moves the sprite back below the bottom edge at a random column. Size,
    /// speed and opacity are kept.
    pub fn respawn<R: Rng + ?Sized>(&mut self, width: f64, height: f64, margin: f64, rng: &mut R) {
        self.x = rng.gen::<f64>() * width.max(0.0);
        self.y = height.max(0.0) + margin.max(0.0);
    }

    pub fn is_above_top(&self) -> bool {
        self.y < -self.size
    }

    pub fn advance(&mut self) {
        self.y -= self.speed;
        self.rotation = (self.rotation + self.spin).rem_euclid(TAU);
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    sprites: Vec<Sprite>,
    width: f64,
    height: f64,
    respawn_margin: f64,
}

impl Field {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let sprites = (0..count).map(|_| Sprite::spawn(width, height, rng)).collect();
        Self {
            sprites,
            width,
            height,
            respawn_margin: 100.0,
        }
    }

    pub fn with_respawn_margin(mut self, margin: f64) -> Self {
        self.respawn_margin = margin.max(0.0);
        self
    }

    /// Advances every sprite by one frame, recycling those that left the top.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for sprite in &mut self.sprites {
            sprite.advance();
            if sprite.is_above_top() {
                sprite.respawn(self.width, self.height, self.respawn_margin, rng);
            }
        }
    }

    /// Sprites keep their positions; only future respawns see the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// One step of a 2D path, in canvas `moveTo`/`lineTo`/`arcTo` terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ArcTo { x1: f64, y1: f64, x2: f64, y2: f64, radius: f64 },
}

/// Outline of a rounded square of side `size` centred on the origin,
/// traced clockwise from the top edge.
pub fn rounded_square_path(size: f64) -> [PathOp; 9] {
    let h = size / 2.0;
    let r = size * CORNER_RATIO;
    [
        PathOp::MoveTo(-h + r, -h),
        PathOp::LineTo(h - r, -h),
        PathOp::ArcTo { x1: h, y1: -h, x2: h, y2: -h + r, radius: r },
        PathOp::LineTo(h, h - r),
        PathOp::ArcTo { x1: h, y1: h, x2: h - r, y2: h, radius: r },
        PathOp::LineTo(-h + r, h),
        PathOp::ArcTo { x1: -h, y1: h, x2: -h, y2: h - r, radius: r },
        PathOp::LineTo(-h, -h + r),
        PathOp::ArcTo { x1: -h, y1: -h, x2: -h + r, y2: -h, radius: r },
    ]
}
