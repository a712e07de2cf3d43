mod filesystem;
#[cfg(test)]
pub(crate) mod memory;

pub use filesystem::{
    basename, expand_tilde, join_path, normalize, parent_of, FileSystem, LocalFileSystem,
};
