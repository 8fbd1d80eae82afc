//! Lead-through trajectory recording: the checkpoint file format and the
//! recorder that appends one checkpoint per received command label.

mod checkpoint;
mod error;
mod recorder;
mod trajectory_file;

pub use crate::{checkpoint::*, error::*, recorder::*, trajectory_file::*};
