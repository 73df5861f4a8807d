use std::error::Error;
use std::io::{self, Read, Write};
use std::process;

use assistant_lang::parser::{parse_expression, parse_for};
use assistant_lang::serialize::{serialize_expression, serialize_for_header};

fn main() {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("assistant-lang-parse: failed to read stdin: {e}");
        process::exit(1);
    }

    let input = input.trim();
    let json = if input.is_empty() {
        "null".to_string()
    } else {
        to_json(input).unwrap_or_else(|e| {
            eprintln!("assistant-lang-parse: {e}");
            process::exit(1);
        })
    };

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{json}").is_err() {
        process::exit(1);
    }
}

/// `for ...` lines are loop headers; anything else is an expression.
fn to_json(input: &str) -> Result<String, Box<dyn Error>> {
    let is_loop = input
        .strip_prefix("for")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace));
    if is_loop {
        Ok(serialize_for_header(&parse_for(input)?)?)
    } else {
        Ok(serialize_expression(&parse_expression(input)?)?)
    }
}
