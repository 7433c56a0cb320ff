//! Page shell: reads the config, fills in the content-driven sections and
//! mounts every widget. A widget whose elements are missing is skipped.

use std::fmt::Display;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement};

use super::carousel::Carousel;
use super::nav::Nav;
use super::popup::Popup;
use super::render::ParticleAnimator;
use super::typewriter::TypewriterHandle;
use super::{carousel, dom, nav, popup, render, typewriter};
use crate::config::SiteConfig;
use crate::content::{Channel, CHANNELS, ENGLISH_NAME, THAI_NAME, VIDEOS};
use crate::error::{PortfolioError, Result};
use crate::typewriter::Typewriter;

pub const CONFIG_ID: &str = "site-config";
pub const CANVAS_ID: &str = "particles";
pub const HERO_NAME_ID: &str = "hero-name";
pub const CHANNEL_GRID_ID: &str = "channel-grid";

/// Everything that keeps the page alive. Dropping it tears the page down.
pub struct Page {
    _particles: Option<ParticleAnimator>,
    _carousel: Option<Carousel>,
    _popup: Option<Popup>,
    _typewriter: Option<TypewriterHandle>,
    _nav: Option<Nav>,
}

impl Page {
    pub fn mount() -> std::result::Result<Self, JsValue> {
        let doc = dom::document()?;
        let config = load_config(&doc);
        log::debug!("site config: {config:?}");

        skip_on_error("channel grid", render_channels(&doc, CHANNELS));

        Ok(Self {
            _particles: skip_on_error("particle field", mount_particles(&doc, &config)),
            _carousel: skip_on_error("carousel", carousel::mount(&doc, VIDEOS, &config)),
            _popup: skip_on_error("contact popup", popup::mount(&doc)),
            _typewriter: skip_on_error("typewriter", mount_typewriter(&doc, &config)),
            _nav: skip_on_error("nav", nav::mount(&doc)),
        })
    }
}

fn skip_on_error<T, E: Display>(what: &str, result: std::result::Result<T, E>) -> Option<T> {
    result
        .map_err(|err| log::warn!("{what} not mounted: {err}"))
        .ok()
}

fn load_config(doc: &Document) -> SiteConfig {
    let text = doc
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content());
    SiteConfig::load_or_default(text.as_deref())
}

fn mount_particles(doc: &Document, config: &SiteConfig) -> Result<ParticleAnimator> {
    let canvas = dom::by_id(doc, CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PortfolioError::MissingElement(CANVAS_ID))?;
    render::start(canvas, config)
}

fn mount_typewriter(doc: &Document, config: &SiteConfig) -> Result<TypewriterHandle> {
    let target = dom::by_id(doc, HERO_NAME_ID)?;
    Ok(typewriter::start(
        target,
        Typewriter::new(ENGLISH_NAME, THAI_NAME),
        config,
    ))
}

/// One card per channel: name, role, link and period.
pub fn render_channels(doc: &Document, channels: &[Channel]) -> Result<()> {
    let grid = dom::by_id(doc, CHANNEL_GRID_ID)?;
    grid.set_text_content(None);
    for channel in channels {
        let card = dom::element(doc, "div", "channel-card", None)?;
        card.append_child(&dom::element(doc, "h4", "channel-name", Some(channel.name))?)?;
        card.append_child(&dom::element(doc, "p", "channel-role", Some(channel.role))?)?;
        card.append_child(&dom::external_link(doc, channel.url, channel.url, "channel-link")?)?;
        card.append_child(&dom::element(doc, "p", "channel-period", Some(channel.period))?)?;
        grid.append_child(&card)?;
    }
    Ok(())
}
