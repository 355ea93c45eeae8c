use web_sys::{Document, Element};

use crate::domain::chart::{ChartPoint, area_path, line_path};
use crate::domain::errors::DomError;
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_delay};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const GRADIENT_ID: &str = "chartGradient";
const LINE_COLOR: &str = "#d4af37";
const DASH_HIDDEN: &str = "stroke-dasharray: 1000; stroke-dashoffset: 1000; transition: stroke-dashoffset 3s ease-in-out";
const DASH_DRAWN: &str = "stroke-dasharray: 1000; stroke-dashoffset: 0; transition: stroke-dashoffset 3s ease-in-out";

fn svg(document: &Document, tag: &str, attrs: &[(&str, &str)]) -> Result<Element, DomError> {
    let element = document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| DomError::ElementCreationFailed(format!("<{}>: {:?}", tag, e)))?;
    for (name, value) in attrs {
        dom::set_attr(&element, name, value)?;
    }
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> Result<(), DomError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| DomError::JsCallFailed(format!("appendChild: {:?}", e)))
}

/// Draws the decorative price curve into `container` (replacing its content).
///
/// The stroke starts fully dashed out and is revealed after `draw_delay_ms`
/// through a CSS transition; the returned handle cancels that reveal.
pub fn render_sparkline(container: &Element, points: &[ChartPoint], draw_delay_ms: u32) -> Result<TaskHandle, DomError> {
    let document = dom::document()?;
    container.set_inner_html("");

    let root = svg(&document, "svg", &[("viewBox", "0 0 500 300"), ("width", "100%"), ("height", "100%")])?;

    let defs = svg(&document, "defs", &[])?;
    let gradient = svg(
        &document,
        "linearGradient",
        &[("id", GRADIENT_ID), ("x1", "0%"), ("y1", "0%"), ("x2", "0%"), ("y2", "100%")],
    )?;
    append(&gradient, &svg(&document, "stop", &[("offset", "0%"), ("stop-color", "rgba(212, 175, 55, 0.3)")])?)?;
    append(&gradient, &svg(&document, "stop", &[("offset", "100%"), ("stop-color", "rgba(212, 175, 55, 0)")])?)?;
    append(&defs, &gradient)?;
    append(&root, &defs)?;

    let area_d = area_path(points);
    let fill = format!("url(#{})", GRADIENT_ID);
    append(&root, &svg(&document, "path", &[("d", area_d.as_str()), ("fill", fill.as_str())])?)?;

    let line_d = line_path(points);
    let line = svg(
        &document,
        "path",
        &[
            ("d", line_d.as_str()),
            ("stroke", LINE_COLOR),
            ("stroke-width", "2"),
            ("fill", "none"),
            ("class", "chart-line"),
            ("style", DASH_HIDDEN),
        ],
    )?;
    append(&root, &line)?;
    append(container, &root)?;

    Ok(spawn_delay(draw_delay_ms, move || {
        let _ = line.set_attribute("style", DASH_DRAWN);
    }))
}
