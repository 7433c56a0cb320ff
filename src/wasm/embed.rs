use web_sys::{Document, Element, HtmlScriptElement};
use wasm_bindgen::JsCast;

use super::dom;
use crate::embed::{EmbedCard, EMBED_CLASS, EMBED_SCRIPT_SRC, EMBED_STYLE};
use crate::error::{PortfolioError, Result};

/// Builds the card element: the embed blockquote followed by title and
/// channel. All user-facing strings go in as text nodes or attribute values.
pub fn render_card(doc: &Document, card: &EmbedCard) -> Result<Element> {
    let root = dom::element(doc, "div", "video-card", None)?;

    let quote = dom::element(doc, "blockquote", EMBED_CLASS, None)?;
    quote.set_attribute("cite", &card.cite)?;
    quote.set_attribute("data-video-id", &card.video_id)?;
    quote.set_attribute("style", EMBED_STYLE)?;

    let section = dom::element(doc, "section", "", None)?;
    section.append_child(&link(doc, &card.author)?)?;
    if !card.caption.is_empty() {
        section.append_child(&doc.create_text_node(&format!(" {} ", card.caption)))?;
    }
    for tag in &card.tags {
        section.append_child(&link(doc, tag)?)?;
        section.append_child(&doc.create_text_node(" "))?;
    }
    if let Some(music) = &card.music {
        section.append_child(&link(doc, music)?)?;
    }
    quote.append_child(&section)?;
    root.append_child(&quote)?;

    let info = dom::element(doc, "div", "video-info", None)?;
    info.append_child(&dom::element(doc, "h4", "video-title", Some(&card.title))?)?;
    info.append_child(&dom::element(doc, "p", "video-channel", Some(&card.channel))?)?;
    root.append_child(&info)?;

    Ok(root)
}

fn link(doc: &Document, link: &crate::embed::Link) -> Result<Element> {
    let a = dom::external_link(doc, &link.href, &link.text, "")?;
    a.set_attribute("title", &link.title)?;
    Ok(a)
}

/// The third-party embed script, attached to `<body>` for as long as this
/// handle lives. Loading it makes the script scan the page for embeds.
pub struct EmbedScript {
    script: HtmlScriptElement,
}

impl EmbedScript {
    pub fn load(doc: &Document) -> Result<Self> {
        let body = doc.body().ok_or(PortfolioError::MissingElement("body"))?;
        let script = doc
            .create_element("script")?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| PortfolioError::Js("script element has wrong type".into()))?;
        script.set_src(EMBED_SCRIPT_SRC);
        script.set_async(true);
        body.append_child(&script)?;
        log::debug!("embed script requested");
        Ok(Self { script })
    }
}

impl Drop for EmbedScript {
    fn drop(&mut self) {
        self.script.remove();
    }
}
