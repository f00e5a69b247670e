pub mod batch;
pub mod category_filter;

pub use batch::*;
pub use category_filter::*;
