use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("leadthrough: Output file {:?} already exists.", .0)]
    OutputFileExists(PathBuf),
    #[error("leadthrough: No OutputDirectory {:?} is found.", .0)]
    NoOutputDirectory(PathBuf),
    #[error("leadthrough: Failed to write {:?} ({}).", .0, .1)]
    WriteFailure(PathBuf, #[source] std::io::Error),
    #[error("leadthrough: armci: {:?}", .0)]
    Armci(#[from] armci::Error),
}
