pub mod code;
pub mod config;
pub mod consts;
pub mod error;
pub mod table;

pub use code::{Element, MorseCode};
pub use error::{MorseError, MorseResult};
pub use table::{decode, lookup, REF_TABLE};
