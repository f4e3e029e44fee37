mod batch;
pub mod constants;
pub mod equation;
mod layout;
mod options;
mod report;
pub mod roots;
mod solve;
mod types;
mod units;

pub use batch::*;
pub use layout::{MatLayout, PaperPosition, compute_layout};
pub use options::*;
pub use report::render_report;
pub use solve::{derive_bottom_border, solve_border};
pub use types::*;
pub use units::*;
