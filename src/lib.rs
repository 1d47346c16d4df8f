//! This crate contains code for a small untyped lambda calculus interpreter
//! with built-in integer arithmetic. Terms are reduced as they are parsed.

pub mod end_to_end;
pub mod lexical_analysis;
pub mod recursive_descent_parsing;
pub mod term_construction;
pub mod term_representation;

pub use recursive_descent_parsing::{evaluate, ParseError};
pub use term_representation::Term;
