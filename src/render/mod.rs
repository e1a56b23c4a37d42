//! Renderers that draw registry state outside the terminal.

pub mod svg;

pub use svg::{render_svg, SvgFrames};
