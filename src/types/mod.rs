pub mod error;
pub mod file;

pub use error::{Result, ResultExt, TocError};
pub use file::{ClassifiedFile, FileDescriptor};
