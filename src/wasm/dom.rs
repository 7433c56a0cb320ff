use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, Window};

use crate::error::{PortfolioError, Result};

pub fn win() -> Result<Window> {
    window().ok_or(PortfolioError::Js("no window".into()))
}

pub fn document() -> Result<Document> {
    win()?
        .document()
        .ok_or(PortfolioError::Js("no document".into()))
}

pub fn by_id(doc: &Document, id: &'static str) -> Result<Element> {
    doc.get_element_by_id(id)
        .ok_or(PortfolioError::MissingElement(id))
}

pub fn html_by_id(doc: &Document, id: &'static str) -> Result<HtmlElement> {
    by_id(doc, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PortfolioError::MissingElement(id))
}

/// `<tag class="...">` with optional text content. Text is never parsed.
pub fn element(doc: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

/// `<a target="_blank" rel="noopener noreferrer">` pointing at `href`.
pub fn external_link(doc: &Document, href: &str, text: &str, class: &str) -> Result<Element> {
    let a = element(doc, "a", class, Some(text))?;
    a.set_attribute("href", href)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    Ok(a)
}
