//! Interactive terminal front end of the [`FilterEngine`](crate::filter::FilterEngine).
//!
//! Every input line is one UI event; it runs to completion before the next
//! line is read.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Session;
