pub mod chart_svg;
pub mod starfield_canvas;

pub use chart_svg::render_sparkline;
pub use starfield_canvas::{StarfieldContext, read_device_hints};
