use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use super::frame::FrameLoop;
use crate::config::SiteConfig;
use crate::error::{PortfolioError, Result};
use crate::particles::{rounded_square_path, Field, PathOp, Sprite, STROKE_STYLE};

/// Running background animation. Dropping it stops the loop and detaches the
/// resize listener.
pub struct ParticleAnimator {
    _frames: FrameLoop,
    _resize: EventListener,
}

/// Start the sprite field on `canvas`, sized to the window.
pub fn start(canvas: HtmlCanvasElement, config: &SiteConfig) -> Result<ParticleAnimator> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(PortfolioError::NoDrawingContext)?
        .dyn_into()
        .map_err(|_| PortfolioError::NoDrawingContext)?;

    let (width, height) = fit_to_window(&canvas)?;
    let mut rng = StdRng::from_entropy();
    let field = Field::new(config.particle_count, width, height, &mut rng)
        .with_respawn_margin(config.respawn_margin);
    let field = Rc::new(RefCell::new(field));

    // Resize canvas to fit window
    let resize = {
        let canvas = canvas.clone();
        let field = field.clone();
        EventListener::new(&dom::win()?, "resize", move |_| match fit_to_window(&canvas) {
            Ok((w, h)) => field.borrow_mut().resize(w, h),
            Err(err) => log::warn!("canvas resize skipped: {err}"),
        })
    };

    let frames = FrameLoop::start(move |_| {
        let mut field = field.borrow_mut();
        field.step(&mut rng);
        let (w, h) = field.size();
        ctx.clear_rect(0.0, 0.0, w, h);
        for sprite in field.sprites() {
            if let Err(err) = draw_sprite(&ctx, sprite) {
                log::debug!("sprite draw failed: {err:?}");
            }
        }
    });

    log::info!("particle field started with {} sprites", config.particle_count);
    Ok(ParticleAnimator {
        _frames: frames,
        _resize: resize,
    })
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(f64, f64)> {
    let win = dom::win()?;
    let w = win.inner_width()?.as_f64().unwrap_or_default();
    let h = win.inner_height()?.as_f64().unwrap_or_default();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok((w, h))
}

/// Stroke one sprite as a rounded square at its position, rotation and
/// opacity.
pub fn draw_sprite(
    ctx: &CanvasRenderingContext2d,
    sprite: &Sprite,
) -> std::result::Result<(), wasm_bindgen::JsValue> {
    ctx.save();
    ctx.translate(sprite.x, sprite.y)?;
    ctx.rotate(sprite.rotation)?;
    ctx.set_global_alpha(sprite.opacity);

    ctx.begin_path();
    for op in rounded_square_path(sprite.size) {
        match op {
            PathOp::MoveTo(x, y) => ctx.move_to(x, y),
            PathOp::LineTo(x, y) => ctx.line_to(x, y),
            PathOp::ArcTo { x1, y1, x2, y2, radius } => ctx.arc_to(x1, y1, x2, y2, radius)?,
        }
    }
    ctx.set_stroke_style_str(STROKE_STYLE);
    ctx.stroke();

    ctx.restore();
    Ok(())
}
