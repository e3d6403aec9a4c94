#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod password_field;
pub use password_field::*;

mod toggle;
pub use toggle::*;

mod visibility;
pub use visibility::*;
