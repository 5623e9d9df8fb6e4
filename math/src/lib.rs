mod consts;
#[cfg(feature = "mint")]
mod interop;
mod random;
mod utils;
mod vec2;

pub use consts::*;
pub use utils::*;
pub use vec2::*;
