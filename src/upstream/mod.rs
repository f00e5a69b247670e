pub mod error;
pub mod memory;
pub mod quickgo;
pub mod traits;

pub use error::*;
pub use memory::*;
pub use quickgo::*;
pub use traits::*;
