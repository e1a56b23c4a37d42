//! SVG export of the registry.
//!
//! Grid cell `(1, 1)` sits at the document origin and cells are
//! `cell_pitch` apart, so a box at `(row, column)` is drawn at
//! `((column - 1) * pitch, (row - 1) * pitch)`. The conveyor lane (row 0 and
//! column 0) falls at negative offsets; the `viewBox` starts one pitch
//! before the origin to keep it visible.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SvgLayout;
use crate::error::Result;
use crate::player::Scene;
use crate::registry::BoxRegistry;
use crate::types::{BoxColor, GridBox};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render the whole registry as a standalone SVG document.
pub fn render_svg(registry: &BoxRegistry, layout: &SvgLayout) -> String {
    let pitch = i64::from(layout.cell_pitch);
    let extent = (i64::from(registry.grid_size()) + 1) * pitch;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{extent}" height="{extent}" viewBox="{} {} {extent} {extent}">"#,
        -pitch, -pitch
    );
    for b in registry.iter() {
        let _ = writeln!(out, "  {}", rect(b, layout));
    }
    out.push_str("</svg>\n");
    out
}

/// SVG fill for a box.
pub fn fill(b: &GridBox, layout: &SvgLayout) -> String {
    match b.color {
        BoxColor::Heat => format!("rgba(255, 0, 0, {})", b.heat_alpha()),
        BoxColor::Marked => layout.marked_fill.clone(),
        BoxColor::Docked => layout.dock_fill.clone(),
    }
}

fn rect(b: &GridBox, layout: &SvgLayout) -> String {
    let pitch = i64::from(layout.cell_pitch);
    let x = (i64::from(b.column) - 1) * pitch;
    let y = (i64::from(b.row) - 1) * pitch;
    let label = escape(&b.label);
    format!(
        r#"<rect id="{label}" x="{x}" y="{y}" width="{size}" height="{size}" fill="{fill}"><title>{label}</title></rect>"#,
        size = layout.cell_size,
        fill = escape(&fill(b, layout)),
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes one numbered SVG file per redraw into a directory.
#[derive(Debug)]
pub struct SvgFrames {
    dir: PathBuf,
    layout: SvgLayout,
    written: usize,
}

impl SvgFrames {
    /// Create the output directory if needed.
    pub fn create(dir: impl AsRef<Path>, layout: SvgLayout) -> Result<Self> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            layout,
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Write an arbitrary frame, e.g. the starting grid before any step.
    pub fn write_frame(&mut self, registry: &BoxRegistry) -> Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:05}.svg", self.written));
        fs::write(&path, render_svg(registry, &self.layout))?;
        self.written += 1;
        debug!(path = %path.display(), "frame written");
        Ok(path)
    }
}

impl Scene for SvgFrames {
    fn redraw(&mut self, registry: &BoxRegistry) -> Result<()> {
        self.write_frame(registry).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::types::{BoxId, Direction, MoveStep};

    fn registry() -> BoxRegistry {
        BoxRegistry::populate(&SimulationConfig::default())
    }

    #[test]
    fn test_document_has_one_rect_per_box() {
        let svg = render_svg(&registry(), &SvgLayout::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect ").count(), 100);
        // One extra pitch on each axis holds the conveyor lane.
        assert!(svg.contains(r#"width="935" height="935" viewBox="-85 -85 935 935""#));
    }

    #[test]
    fn test_rect_geometry_matches_page_layout() {
        let svg = render_svg(&registry(), &SvgLayout::default());
        assert!(svg.contains(r#"<rect id="Data-a-a" x="0" y="0" width="75" height="75""#));
        assert!(svg.contains(r#"<rect id="Data-c-b" x="85" y="170""#));
    }

    #[test]
    fn test_fills() {
        let reg = registry();
        let layout = SvgLayout::default();
        let young = reg.find_by_label("Data-a-a").expect("box"); // test: populated grid
        assert_eq!(fill(young, &layout), "rgba(255, 0, 0, 0.1)");
        let marked = reg.find_by_label("Data-f-e").expect("box"); // test: populated grid
        assert_eq!(fill(marked, &layout), "blue");
    }

    #[test]
    fn test_docked_box_uses_dock_fill() {
        let mut reg = registry();
        let id = reg.find_by_label("Data-a-a").expect("box").id; // test: populated grid
        reg.apply(&MoveStep::new(id, Direction::Left)).expect("in bounds"); // test: known-good move
        reg.apply(&MoveStep::new(id, Direction::Up)).expect("in bounds"); // test: known-good move

        let svg = render_svg(&reg, &SvgLayout::default());
        assert!(svg.contains(r#"<rect id="Data-a-a" x="-85" y="-85" width="75" height="75" fill="green">"#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut reg = BoxRegistry::new(1);
        reg.insert(GridBox {
            id: BoxId(0),
            label: "a<b>&\"c\"".to_string(),
            row: 1,
            column: 1,
            age: 0,
            color: BoxColor::Heat,
        });
        let svg = render_svg(&reg, &SvgLayout::default());
        assert!(svg.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
    }

    #[test]
    fn test_frames_written_per_redraw() {
        let dir = tempfile::tempdir().expect("tempdir"); // test: tempdir is writable
        let mut frames = SvgFrames::create(dir.path().join("frames"), SvgLayout::default())
            .expect("create frames dir"); // test: tempdir is writable
        let reg = registry();

        frames.redraw(&reg).expect("write frame"); // test: tempdir is writable
        frames.redraw(&reg).expect("write frame"); // test: tempdir is writable

        assert_eq!(frames.written(), 2);
        assert!(dir.path().join("frames/frame_00000.svg").exists());
        assert!(dir.path().join("frames/frame_00001.svg").exists());
    }
}
