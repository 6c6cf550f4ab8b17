pub mod client;
pub mod fanout;

pub use client::*;
pub use fanout::*;
