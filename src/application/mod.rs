// Application layer - the operation surface the presentation shell drives.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
