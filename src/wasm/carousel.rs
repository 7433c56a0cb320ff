use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

use super::dom;
use super::embed::{render_card, EmbedScript};
use super::frame::FrameLoop;
use crate::carousel::{duplicate, page_target, AutoScroll, Direction};
use crate::config::SiteConfig;
use crate::content::Video;
use crate::embed;
use crate::error::Result;

pub const CONTAINER_ID: &str = "carousel";
pub const TRACK_ID: &str = "carousel-track";
pub const PREV_ID: &str = "carousel-prev";
pub const NEXT_ID: &str = "carousel-next";

/// Live video carousel. Dropping it stops auto-scroll, detaches the hover and
/// paging listeners and unloads the embed script.
pub struct Carousel {
    _frames: FrameLoop,
    _listeners: Vec<EventListener>,
    _script: EmbedScript,
}

pub fn mount(doc: &Document, videos: &[Video], config: &SiteConfig) -> Result<Carousel> {
    let container = dom::by_id(doc, CONTAINER_ID)?;
    let track = dom::by_id(doc, TRACK_ID)?;

    let (cards, skipped) = embed::cards(videos);
    for err in &skipped {
        log::warn!("video card skipped: {err}");
    }
    track.set_text_content(None);
    for card in duplicate(&cards) {
        track.append_child(&render_card(doc, &card)?)?;
    }

    let script = EmbedScript::load(doc)?;
    let state = Rc::new(RefCell::new(AutoScroll::new(config.scroll_px_per_sec)));

    let frames = {
        let state = state.clone();
        let container = container.clone();
        FrameLoop::start(move |now| {
            let width = f64::from(container.scroll_width());
            if let Some(offset) = state.borrow_mut().tick(now, width) {
                container.set_scroll_left(offset as i32);
            }
        })
    };

    let mut listeners = hover_listeners(&container, &state);
    for (id, direction) in [(PREV_ID, Direction::Left), (NEXT_ID, Direction::Right)] {
        // Paging buttons are optional; the loop still runs without them.
        let Ok(button) = dom::by_id(doc, id) else {
            log::warn!("#{id} not found, paging disabled in that direction");
            continue;
        };
        listeners.extend(hover_listeners(&button, &state));
        let container = container.clone();
        let step = config.page_step_px;
        listeners.push(EventListener::new(&button, "click", move |_| {
            let target = page_target(f64::from(container.scroll_left()), direction, step);
            let opts = ScrollToOptions::new();
            opts.set_left(target);
            opts.set_behavior(ScrollBehavior::Smooth);
            container.scroll_to_with_scroll_to_options(&opts);
        }));
    }

    log::info!("carousel mounted with {} cards", cards.len() * 2);
    Ok(Carousel {
        _frames: frames,
        _listeners: listeners,
        _script: script,
    })
}

/// Pause on pointer-enter, resume from a fresh lap on pointer-leave.
fn hover_listeners(target: &Element, state: &Rc<RefCell<AutoScroll>>) -> Vec<EventListener> {
    let enter = {
        let state = state.clone();
        EventListener::new(target, "mouseenter", move |_| state.borrow_mut().pause())
    };
    let leave = {
        let state = state.clone();
        EventListener::new(target, "mouseleave", move |_| state.borrow_mut().resume())
    };
    vec![enter, leave]
}
