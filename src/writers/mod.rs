pub mod figure_writer;

pub use figure_writer::{FigureWriter, OutputFormat};
