use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::render::{request_animation_frame, AnimationFrame};

type Slot = Rc<RefCell<Option<AnimationFrame>>>;
type OnFrame = Rc<RefCell<dyn FnMut(f64)>>;

/// A `requestAnimationFrame` loop that keeps rescheduling itself until the
/// handle is dropped.
pub struct FrameLoop {
    _slot: Slot,
}

impl FrameLoop {
    /// Runs `on_frame` with the frame timestamp (ms) once per display refresh.
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        // `slot` holds the pending frame. Each frame replaces it with the next
        // request, so dropping the slot cancels whichever frame is queued.
        let slot: Slot = Rc::new(RefCell::new(None));
        let on_frame: OnFrame = Rc::new(RefCell::new(on_frame));
        schedule(&slot, on_frame);
        Self { _slot: slot }
    }
}

fn schedule(slot: &Slot, on_frame: OnFrame) {
    let next: Weak<RefCell<Option<AnimationFrame>>> = Rc::downgrade(slot);
    let frame = request_animation_frame(move |timestamp| {
        // a dead slot means the loop was dropped
        let Some(slot) = next.upgrade() else { return };
        (*on_frame.borrow_mut())(timestamp);
        schedule(&slot, on_frame);
    });
    *slot.borrow_mut() = Some(frame);
}
