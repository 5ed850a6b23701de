//! The intermediate representation of a template, and the list structure holding it.

pub mod enums;
pub mod expression;
pub mod handle;
pub mod operations;
pub mod ops;
pub mod traits;

pub use enums::*;
pub use expression::*;
pub use handle::*;
pub use operations::*;
pub use ops::*;
