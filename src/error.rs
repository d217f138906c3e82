//! Crate-wide error taxonomy.
//!
//! Most failure modes in this crate are not errors at all: a pruned search
//! subtree, a skipped malformed input line, or an empty result set are all
//! expected outcomes and never surface as an `Err`. What's left is the small
//! set of conditions a caller genuinely needs to react to.

use std::io;
use std::path::PathBuf;

/// Recoverable failures surfaced by the library.
///
/// Allocation failure (the original's `malloc` returning `NULL`) is not a
/// variant here: the Rust allocator aborts the process on OOM rather than
/// handing back a `Result`, so there is nothing for this enum to model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open dataset {path:?}")]
    DatasetOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
