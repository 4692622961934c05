//! `storyloom estimate`: Estimate the token size of a text.

use std::io::Read;
use storyloom_context::estimate_tokens;

pub fn run(text: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    println!("{}", estimate_tokens(&text));
    Ok(())
}
