use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::execute;

const PROMPT: &str = ">>> ";
const QUIT: &str = "q";

/// Reads one complete program per line and runs it against a fresh
/// environment. Stops on `q` or end of input.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line == QUIT {
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        if let Err(err) = execute(line, &mut *output) {
            debug!(%err, "repl line failed");
            writeln!(output, "Error: {}", err)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_repl_runs_each_line() {
        assert_eq!(session("{ ;1 + 2; }\nq\n"), ">>> 3\n>>> ");
    }

    #[test]
    fn test_repl_eof_prints_newline() {
        assert_eq!(session("{ ;pi * 0; }\n"), ">>> 0.0\n>>> \n");
    }

    #[test]
    fn test_repl_skips_empty_lines() {
        assert_eq!(session("\n\nq\n"), ">>> >>> >>> ");
    }

    #[test]
    fn test_repl_reports_errors_and_continues() {
        assert_eq!(
            session("{ ;x; }\n{ ;2; }\nq"),
            ">>> Error: Variable 'x' does not exist\n>>> 2\n>>> "
        );
    }

    #[test]
    fn test_repl_lines_do_not_share_bindings() {
        assert_eq!(
            session("{ num x = 1; }\n{ num x = 2; ;x; }\nq\n"),
            ">>> >>> 2\n>>> "
        );
    }
}
