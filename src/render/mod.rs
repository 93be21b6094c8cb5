pub mod frame;
pub mod grid;

pub use frame::{PlotSummary, Renderer};
pub use grid::Grid;
