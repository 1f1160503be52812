pub mod boundary_reader;
pub mod record_reader;
pub mod source;
pub mod source_loader;

pub use boundary_reader::BoundaryCollection;
pub use record_reader::RecordReader;
pub use source::Source;
pub use source_loader::{MapInputs, SourceLoader};
