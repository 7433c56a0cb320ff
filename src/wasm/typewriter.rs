use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::typewriter::Typewriter;

struct Inner {
    writer: Typewriter,
    target: Element,
    config: SiteConfig,
    _pending: Option<Timeout>,
}

/// Hero name animation. This is the only strong reference to the state, so
/// dropping it drops the pending `Timeout`, which clears the timer.
pub struct TypewriterHandle {
    _inner: Rc<RefCell<Inner>>,
}

pub fn start(target: Element, writer: Typewriter, config: &SiteConfig) -> TypewriterHandle {
    target.set_text_content(Some(writer.text()));
    let inner = Rc::new(RefCell::new(Inner {
        writer,
        target,
        config: config.clone(),
        _pending: None,
    }));
    schedule(&inner);
    log::info!("typewriter started");
    TypewriterHandle { _inner: inner }
}

/// Arms the next timer. The timer only holds a weak reference, so once the
/// handle is gone the chain stops.
fn schedule(inner: &Rc<RefCell<Inner>>) {
    let delay = {
        let state = inner.borrow();
        state.writer.next_delay(&state.config)
    };
    let weak: Weak<RefCell<Inner>> = Rc::downgrade(inner);
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let timeout = Timeout::new(millis, move || {
        let Some(inner) = weak.upgrade() else { return };
        {
            let mut state = inner.borrow_mut();
            state.writer.advance();
            state.target.set_text_content(Some(state.writer.text()));
        }
        schedule(&inner);
    });
    inner.borrow_mut()._pending = Some(timeout);
}
