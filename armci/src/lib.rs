mod clients;
mod error;
mod traits;
mod utils;

pub use clients::*;
pub use error::*;
pub use traits::*;
pub use utils::*;

// re-export
pub use nalgebra::Isometry3;
