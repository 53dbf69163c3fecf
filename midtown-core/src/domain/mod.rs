//! Core domain logic
//!
//! The three applets are pure transformations over primitive inputs. Nothing
//! here does I/O or keeps state between calls.

pub mod cipher;
pub mod result;
pub mod rps;
pub mod table;

pub use cipher::{CipherKey, CipherMode};
pub use rps::{judge, Choice, RoundResult};
pub use table::{generate, TableRow};
