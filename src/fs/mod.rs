//! File system access behind a trait so template inspection can be tested
//! without touching disk

mod filesystem;
mod mock;
mod real;

pub use filesystem::FileSystem;
pub use mock::MockFileSystem;
pub use real::RealFileSystem;
