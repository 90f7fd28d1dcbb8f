pub mod error;

// Case portal domain modules
pub mod case;
pub mod category;
pub mod common;
pub mod config;
pub mod session;

pub use error::*;

pub use case::*;
pub use category::*;
pub use config::*;
pub use session::*;
