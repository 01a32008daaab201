mod account;
mod directory;
mod money;

pub use account::*;
pub use directory::*;
pub use money::*;
