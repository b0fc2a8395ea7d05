//! Yes/no confirmation before destructive operations.

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks the user a yes/no question and blocks until answered.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Reads the answer from stdin, printing the question on stdout.
///
/// Only `y`/`yes` (any case) confirm. Anything else, including EOF or a
/// read error, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        let stdin = io::stdin();
        ask(question, &mut io::stdout(), &mut stdin.lock())
    }
}

fn ask(question: &str, out: &mut dyn Write, input: &mut dyn BufRead) -> bool {
    if let Err(e) = write!(out, "{} [y/N] ", question).and_then(|_| out.flush()) {
        warn!(error = %e, "failed to show confirmation prompt");
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            warn!(error = %e, "failed to read confirmation");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let confirmed = ask("Remove file 'a'?", &mut out, &mut input);
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn yes_variants_confirm() {
        for input in ["y\n", "Y\n", "yes\n", " YES \n"] {
            assert!(answer(input).0, "{input:?} should confirm");
        }
    }

    #[test]
    fn anything_else_declines() {
        for input in ["n\n", "\n", "yep\n", ""] {
            assert!(!answer(input).0, "{input:?} should decline");
        }
    }

    #[test]
    fn question_is_printed_with_default_hint() {
        let (_, shown) = answer("n\n");
        assert_eq!(shown, "Remove file 'a'? [y/N] ");
    }
}
