//! Interactive read-eval-print loop.
//!
//! Reading stops at tokens: there is no list reader yet, so only
//! self-evaluating atoms (numbers, strings, booleans, the empty list) can be read,
//! and evaluation is the identity.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::data::Object;
use crate::reader::{tokenize, Token, TokenKind};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prompt shown while a string is still open.
const CONTINUATION: &str = "... ";

/// Settings for the loop.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print each token before the result.
    pub show_tokens: bool,
    /// Skip the welcome and farewell banners.
    pub quiet: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: format!("{NAME} > "),
            show_tokens: false,
            quiet: false,
        }
    }
}

/// Run the loop until `input` is exhausted.
///
/// Results go to `output`, read errors to `errors`.
/// An unterminated string continues onto the next line.
pub fn repl(
    input: &mut impl BufRead,
    output: &mut impl Write,
    errors: &mut impl Write,
    config: &ReplConfig,
) -> std::io::Result<()> {
    info!("starting {} {}", NAME, VERSION);
    if !config.quiet {
        writeln!(output, "Welcome to {NAME} - {VERSION}")?;
    }

    let mut pending = String::new();
    loop {
        let prompt = if pending.is_empty() {
            config.prompt.as_str()
        } else {
            CONTINUATION
        };
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        pending.push_str(&line);

        let tokens = match tokenize(&pending) {
            Ok(tokens) => tokens,
            Err(e) if e.is_incomplete() => {
                debug!("incomplete input, reading another line: {}", e);
                continue;
            }
            Err(e) => {
                writeln!(errors, "{e}")?;
                pending.clear();
                continue;
            }
        };
        pending.clear();

        if config.show_tokens {
            for token in &tokens {
                writeln!(output, "{token}")?;
            }
        }
        match read(&tokens) {
            Ok(Some(sexp)) => writeln!(output, "{}", eval(sexp))?,
            Ok(None) => (),
            Err(e) => writeln!(errors, "{e}")?,
        }
    }

    // Input ended inside a string.
    if !pending.is_empty() {
        if let Err(e) = tokenize(&pending) {
            writeln!(errors, "{}", e.annotate("at end of input"))?;
        }
    }

    if !config.quiet {
        writeln!(output, "\nBye!")?;
    }
    info!("input closed");
    Ok(())
}

/// Read an expression from the tokens: the last one wins.
fn read(tokens: &[Token]) -> Result<Option<Object>, String> {
    let mut sexp = None;
    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::String | TokenKind::EmptyList | TokenKind::Boolean => {
                sexp = Some(token.value.clone())
            }
            _ => return Err(format!("cannot read token {token}: lists and symbols are not supported")),
        }
    }
    Ok(sexp)
}

fn eval(sexp: Object) -> Object {
    sexp
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{repl, ReplConfig};

    fn run(input: &str, config: &ReplConfig) -> (String, String) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        repl(&mut Cursor::new(input), &mut output, &mut errors, config).unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    fn quiet() -> ReplConfig {
        ReplConfig {
            prompt: "> ".to_owned(),
            show_tokens: false,
            quiet: true,
        }
    }

    #[test]
    fn prints_atoms() {
        let (output, errors) = run("42\n\"hi\"\n#true\n()\n1+2i\n", &quiet());
        assert_eq!(output, "> 42\n> \"hi\"\n> #t\n> ()\n> (1.0+2.0i)\n> ");
        assert_eq!(errors, "");
    }

    #[test]
    fn banners() {
        let (output, _) = run("", &ReplConfig::default());
        assert!(output.starts_with("Welcome to schemish - "), "{:?}", output);
        assert!(output.ends_with("schemish > \nBye!\n"), "{:?}", output);
    }

    #[test]
    fn reports_errors_and_continues() {
        let (output, errors) = run("#tx\n(+ 1 2)\n7\n", &quiet());
        assert_eq!(output, "> > > 7\n> ");
        let lines: Vec<&str> = errors.lines().collect();
        assert_eq!(lines.len(), 2, "{:?}", errors);
        assert!(lines[0].contains("illegal boolean literal"), "{}", lines[0]);
        assert!(lines[1].contains("cannot read token"), "{}", lines[1]);
    }

    #[test]
    fn blank_lines_print_nothing() {
        let (output, errors) = run("\n   \n", &quiet());
        assert_eq!(output, "> > > ");
        assert_eq!(errors, "");
    }

    #[test]
    fn strings_continue_across_lines() {
        let (output, errors) = run("\"hello\nworld\"\n", &quiet());
        assert_eq!(output, "> ... \"hello\nworld\"\n> ");
        assert_eq!(errors, "");
    }

    #[test]
    fn open_string_at_end_of_input() {
        let (_, errors) = run("\"hello\n", &quiet());
        assert!(errors.contains("at end of input"), "{}", errors);
        assert!(errors.contains("unterminated string"), "{}", errors);
    }

    #[test]
    fn shows_tokens() {
        let config = ReplConfig {
            show_tokens: true,
            ..quiet()
        };
        let (output, _) = run("#f\n", &config);
        assert_eq!(output, "> [type:BOOLEAN, literal:#f, value:#f]\n#f\n> ");
    }
}
