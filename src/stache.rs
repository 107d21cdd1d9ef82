//! Main module for stache library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod rendering;
pub mod template;
pub mod testing;
pub mod token;
