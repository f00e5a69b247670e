pub mod errors;
pub mod handlers;
pub mod routes;

pub use errors::*;
pub use handlers::*;
pub use routes::*;
