pub mod ast;
pub mod error;
pub mod lexer;
pub mod names;
pub mod parser;
pub mod serialize;
pub mod value;

pub use error::{SyntaxError, SyntaxResult};
pub use value::Value;
