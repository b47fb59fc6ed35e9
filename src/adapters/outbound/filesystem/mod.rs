/// Filesystem adapters for file I/O operations
mod file_writer;
mod inventory_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use inventory_reader::FileSystemInventoryReader;
