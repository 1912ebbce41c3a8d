pub mod gate;
pub mod parse;
