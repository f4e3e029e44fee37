//! Plain text report for a mat layout
//!
//! Lines marked with `*` are the measurements needed to cut the mat.

use crate::layout::MatLayout;
use crate::units::{Unit, format_dim, format_dim_pair};

/// Render `layout` with every length shown in `unit`.
pub fn render_report(layout: &MatLayout, unit: Unit) -> String {
    let pair = |size| format_dim_pair(size, unit);
    let dim = |mm| format_dim(mm, unit);

    let mut out = String::new();

    out.push_str("== Parameters ============================================\n");
    out.push_str(&format!("Print size        {}\n", pair(layout.print)));
    out.push_str(&format!("Paper size        {}\n", pair(layout.paper)));
    out.push_str(&format!("Window overlap    {}\n", pair(layout.overlap)));
    out.push_str(&format!("Mat window size * {}\n", pair(layout.window)));

    out.push_str("\n== Mat Information ========================================\n");
    out.push_str(&format!("Mat size        * {}\n", pair(layout.mat)));
    out.push_str("Window position\n");
    out.push_str(&format!("  Top           * {}\n", dim(layout.borders.side)));
    out.push_str(&format!("  Bottom        * {}\n", dim(layout.borders.bottom)));
    out.push_str(&format!("  Left / Right  * {}\n", dim(layout.borders.side)));

    let position = &layout.paper_position;
    out.push_str("\n== Paper position from sides of mat =======================\n");
    out.push_str(&format!("  Top           * {}\n", dim(position.top)));
    out.push_str(&format!("  Bottom        * {}\n", dim(position.bottom)));
    out.push_str(&format!("  Left          * {}\n", dim(position.left)));
    out.push_str(&format!("  Right         * {}\n", dim(position.right)));

    out
}
