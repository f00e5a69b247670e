pub mod annotation;
pub mod category;
pub mod request;
pub mod service;

pub use annotation::*;
pub use category::*;
pub use request::*;
pub use service::*;
