//! License token model and parser.

pub mod models;
pub mod parse;
