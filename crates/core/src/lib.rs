pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod probe;
pub mod properties;

pub use diagnostics::TracingSink;
pub use error::{CoreError, Result};
pub use probe::{
    CONVENTIONAL_SOURCE_ROOTS, canonical, existing_dir, existing_files, existing_of,
    expand_archives, expand_jars, is_archive,
};
