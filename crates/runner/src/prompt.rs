//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask `question` until the answer is yes or no
///
/// An empty answer returns `default` when one is given. End of input also
/// returns `default`, or fails with `UnexpectedEof` when there is none.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: Option<bool>,
) -> io::Result<bool> {
    let hint = match default {
        None => " [y/n] ",
        Some(true) => " [Y/n] ",
        Some(false) => " [y/N] ",
    };

    loop {
        write!(output, "{}{}", question, hint)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return default
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no answer given"));
        }

        let answer = line.trim();
        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
        } else if let Some(choice) = parse_answer(answer) {
            return Ok(choice);
        }
        writeln!(output, "Please respond with 'yes' or 'no' (or 'y' or 'n').")?;
    }
}
