pub mod figure;
pub mod frame;
pub mod record;
pub mod settings;

pub use figure::{Figure, FigureFrame};
pub use frame::{AnimationOptions, Frame, SliderStep, Transition};
pub use record::{DensityRecord, FieldDisplay};
pub use settings::FigureSettings;
