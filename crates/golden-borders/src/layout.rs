//! Mat layout geometry
//!
//! Derives the print, window, mat and paper rectangles from the options and
//! the solved borders.

use crate::options::{InputKind, MatOptions};
use crate::solve::{derive_bottom_border, solve_border};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance from each side of the mat to the edge of the paper
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperPosition {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Complete mat layout, all values in millimeters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatLayout {
    pub print: RectSize,
    pub paper: RectSize,
    pub overlap: RectSize,
    pub window: RectSize,
    pub mat: RectSize,
    pub borders: BorderSolution,
    pub paper_position: PaperPosition,
    /// Other valid border solutions that were not used
    pub alternatives: Vec<BorderSolution>,
    /// Real roots of the border cubic that gave no usable border
    pub rejected: Vec<f64>,
}

impl MatLayout {
    /// Diagnostic for an ambiguous solve, if any
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        Solved {
            solution: self.borders,
            alternatives: self.alternatives.clone(),
            rejected: self.rejected.clone(),
        }
        .diagnostic()
    }
}

/// Compute the full layout for `options`.
pub fn compute_layout(options: &MatOptions) -> Result<MatLayout> {
    options.validate()?;

    let overlap = options.overlap;
    let mode = options.kind.mode();

    let (print, window, mat, solved) = match options.kind {
        InputKind::Print => {
            let print = options.size;
            let window = RectSize::new(
                print.width - 2.0 * overlap.width,
                print.height - 2.0 * overlap.height,
            );
            let solved = borders_for(window, options, mode)?;
            let b = solved.solution;
            let mat = RectSize::new(window.width + 2.0 * b.side, window.height + b.side + b.bottom);
            (print, window, mat, solved)
        }
        InputKind::Mat => {
            let mat = options.size;
            let solved = borders_for(mat, options, mode)?;
            let b = solved.solution;
            let window = RectSize::new(mat.width - 2.0 * b.side, mat.height - b.side - b.bottom);
            if !window.is_positive() {
                return Err(BorderError::Config(format!(
                    "Border {} leaves no window in a {} x {} mat",
                    b.side, mat.width, mat.height
                )));
            }
            let print = RectSize::new(
                window.width + 2.0 * overlap.width,
                window.height + 2.0 * overlap.height,
            );
            (print, window, mat, solved)
        }
    };

    let paper = if options.paper.width < print.width || options.paper.height < print.height {
        print
    } else {
        options.paper
    };

    let border = solved.solution.side;
    let paper_margin_width = (paper.width - print.width) / 2.0;
    let paper_margin_height = (paper.height - print.height) / 2.0;
    let shift_width = border - overlap.width - paper_margin_width;
    let shift_height = border - overlap.height - paper_margin_height;

    let paper_position = PaperPosition {
        top: shift_height,
        bottom: mat.height - paper.height - shift_height,
        left: shift_width,
        right: mat.width - paper.width - shift_width,
    };

    log::debug!(
        "layout: window {:?}, mat {:?}, borders {:?}",
        window,
        mat,
        solved.solution
    );

    Ok(MatLayout {
        print,
        paper,
        overlap,
        window,
        mat,
        borders: solved.solution,
        paper_position,
        alternatives: solved.alternatives,
        rejected: solved.rejected,
    })
}

/// Solve the borders, or derive the bottom from a fixed side border
fn borders_for(dims: RectSize, options: &MatOptions, mode: Mode) -> Result<Solved> {
    match options.fixed_border {
        Some(side) => Ok(Solved {
            solution: BorderSolution {
                side,
                bottom: derive_bottom_border(side, dims, mode)?,
            },
            ..Solved::default()
        }),
        None => solve_border(dims, options.factor.ratio()?, mode),
    }
}
