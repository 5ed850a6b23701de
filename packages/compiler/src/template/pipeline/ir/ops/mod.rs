pub mod create;
pub mod update;

pub use create::*;
pub use update::*;
