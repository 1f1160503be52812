pub mod coverage;
pub mod figure_assembler;
pub mod frame_builder;

pub use coverage::CoverageReport;
pub use figure_assembler::FigureAssembler;
pub use frame_builder::{
    build_frames, build_step, make_frame, make_label, unique_keys, FrameBuilder, YearCadence,
};
