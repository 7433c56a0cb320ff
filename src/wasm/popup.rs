use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::error::Result;
use crate::popup::ContactPopup;

pub const HERO_ID: &str = "home";
pub const BUTTON_ID: &str = "contact-button";
pub const DIALOG_ID: &str = "contact-dialog";
pub const CLOSE_ID: &str = "contact-close";

struct View {
    button: HtmlElement,
    dialog: HtmlElement,
}

impl View {
    fn render(&self, popup: &ContactPopup) {
        self.button.set_hidden(!popup.is_visible());
        self.dialog.set_hidden(!popup.dialog_shown());
    }
}

pub struct Popup {
    _listeners: [EventListener; 3],
}

pub fn mount(doc: &Document) -> Result<Popup> {
    let hero = dom::by_id(doc, HERO_ID)?;
    let view = Rc::new(View {
        button: dom::html_by_id(doc, BUTTON_ID)?,
        dialog: dom::html_by_id(doc, DIALOG_ID)?,
    });
    let close = dom::by_id(doc, CLOSE_ID)?;
    let state = Rc::new(RefCell::new(ContactPopup::new()));
    view.render(&state.borrow());

    let on_scroll = {
        let (state, view) = (state.clone(), view.clone());
        EventListener::new(&dom::win()?, "scroll", move |_| {
            let bottom = hero.get_bounding_client_rect().bottom();
            let mut popup = state.borrow_mut();
            if popup.on_scroll(bottom) {
                log::debug!("contact button visible: {}", popup.is_visible());
                view.render(&popup);
            }
        })
    };
    let on_open = {
        let (state, view) = (state.clone(), view.clone());
        let button = view.button.clone();
        EventListener::new(&button, "click", move |_| {
            let mut popup = state.borrow_mut();
            popup.open();
            view.render(&popup);
        })
    };
    let on_close = EventListener::new(&close, "click", move |_| {
        let mut popup = state.borrow_mut();
        popup.close();
        view.render(&popup);
    });

    log::info!("contact popup mounted");
    Ok(Popup {
        _listeners: [on_scroll, on_open, on_close],
    })
}
