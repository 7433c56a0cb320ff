use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use super::dom;
use crate::error::Result;
use crate::nav::{menu_region_selector, NavMenu};

pub const MENU_ID: &str = "mobile-menu";
pub const BUTTON_ID: &str = "menu-button";
const OPEN_CLASS: &str = "open";

struct View {
    menu: Element,
    button: Element,
}

impl View {
    fn render(&self, nav: &NavMenu) {
        let open = nav.is_open();
        self.menu.class_list().toggle_with_force(OPEN_CLASS, open).ok();
        self.button
            .set_attribute("aria-expanded", if open { "true" } else { "false" })
            .ok();
    }
}

pub struct Nav {
    _listeners: Vec<EventListener>,
}

pub fn mount(doc: &Document) -> Result<Nav> {
    let view = Rc::new(View {
        menu: dom::by_id(doc, MENU_ID)?,
        button: dom::by_id(doc, BUTTON_ID)?,
    });
    let state = Rc::new(RefCell::new(NavMenu::new()));
    view.render(&state.borrow());

    let mut listeners = Vec::new();
    {
        let (state, view) = (state.clone(), view.clone());
        let button = view.button.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let mut nav = state.borrow_mut();
            nav.toggle();
            view.render(&nav);
        }));
    }
    {
        let (state, view) = (state.clone(), view.clone());
        let selector = menu_region_selector();
        listeners.push(EventListener::new(doc, "click", move |event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten())
                .is_some();
            let mut nav = state.borrow_mut();
            let was_open = nav.is_open();
            nav.on_document_click(inside);
            if was_open != nav.is_open() {
                view.render(&nav);
            }
        }));
    }

    // Section links scroll smoothly and close the drawer.
    let links = doc.query_selector_all("[data-section]")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(section_id) = link.get_attribute("data-section") else {
            continue;
        };
        let doc = doc.clone();
        let (state, view) = (state.clone(), view.clone());
        listeners.push(EventListener::new(&link, "click", move |event| {
            let Some(section) = doc.get_element_by_id(&section_id) else {
                log::warn!("nav target #{section_id} not found");
                return;
            };
            event.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
            let mut nav = state.borrow_mut();
            nav.close();
            view.render(&nav);
        }));
    }

    log::info!("nav mounted with {} section links", links.length());
    Ok(Nav {
        _listeners: listeners,
    })
}
