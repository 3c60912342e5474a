use std::cell::RefCell;
use std::ffi::OsString;
use std::fmt::Display;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use dec2xyz::base::*;
use dec2xyz::{build, parse, Config, Report, Session};

mod tracer;
use tracer::TextTracer;

const USAGE: &str = "dec2xyz [-e expression] [-s] [-1] [-n] [-t] [letters]";

const EXAMPLES: &str = "\
Examples:
  $ seq 0 16 | dec2xyz                    0 1 2 ... 9 a b ... f 10
  $ echo f | dec2xyz -n                   15
  $ seq 0 8 | dec2xyz 01                  0 1 10 11 100 101 110 111 1000
  $ echo 111 | dec2xyz -n 01              7
  $ seq 8 11 | dec2xyz -e \"[0-9][A-F]\"    8 9 A B
  $ seq 1 3 | dec2xyz -1 -e \"[a-z]\"       a b c
  $ seq 23 27 | dec2xyz -s -e \"[A-Z]\"     X Y Z AA AB
  $ echo AAAA | dec2xyz -n -s -e \"[A-Z]\"  18278
  $ seq 1 128 | dec2xyz -1 -e \"[f-a][9-0]\"
                                          f e d ... 81 80 (pad with f for two's complement)
  $ echo 0 | dec2xyz -e \"[[-[]\"           [
  $ seq 0 3 | dec2xyz -1 -s \"|\"           (empty) | || |||
  $ echo aaaaa | dec2xyz -n -1 -s a       5

Each output goes on its own line. The exit status is 0 if at least one input was converted.";

/// Convert numbers read from standard input to numerals over an arbitrary alphabet, or back.
#[derive(Parser, Debug)]
#[command(name = "dec2xyz", override_usage = USAGE, after_help = EXAMPLES)]
struct Args {
    /// Build the alphabet from ranges, e.g. "[0-9][A-F]" (can't be combined with letters)
    #[arg(short = 'e', value_name = "expression", conflicts_with = "letters")]
    expression: Option<String>,

    /// Spreadsheet-column counting (..., x, y, z, aa, ab, ... rather than ..., x, y, z, ba, bb, ...)
    #[arg(short = 's')]
    spreadsheet: bool,

    /// Start counting from 1
    #[arg(short = '1')]
    one_based: bool,

    /// Convert numerals back to numbers
    #[arg(short = 'n')]
    reverse: bool,

    /// Trace every conversion to standard error
    #[arg(short = 't')]
    trace: bool,

    /// The alphabet, one symbol per character [default: 0123456789abcdef]
    #[arg(value_name = "letters")]
    letters: Option<String>,
}

fn main() -> ExitCode {
    let status = match parse_args(std::env::args_os()) {
        Ok(args) => match session(&args) {
            Some(session) => exit_status(&session.run(io::stdin().lock(), io::stdout().lock())),
            None => 1
        },
        Err(status) => status
    };
    ExitCode::from(status)
}

/// Parses the command line. Help and usage errors are printed here, the `Err` holds the exit
/// status to end with.
fn parse_args<I, T>(argv: I) -> Result<Args, u8>
    where I: IntoIterator<Item = T>, T: Into<OsString> + Clone
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(err) if err.kind() == ErrorKind::DisplayHelp =>
            Err(if err.print().is_ok() { 0 } else { 1 }),
        Err(err) => {
            let msg = err.to_string();
            let line = msg.lines().next().unwrap_or_default();
            fail(line.strip_prefix("error: ").unwrap_or(line));
            eprintln!("Write \"{} -h\" for help.", program());
            Err(1)
        }
    }
}

fn session(args: &Args) -> Option<Session> {
    let config = Config{
        alphabet: make_alphabet(args)?,
        convention: if args.spreadsheet { Convention::Bijective } else { Convention::Standard },
        origin: if args.one_based { Origin::One } else { Origin::Zero },
        direction: if args.reverse { Direction::Decode } else { Direction::Encode },
    };
    let session = Session::new(config);
    Some(match args.trace {
        true => session.with_tracer(Rc::new(RefCell::new(TextTracer))),
        false => session
    })
}

/// 0 if at least one token was converted, 1 otherwise or on an I/O error.
fn exit_status(result: &io::Result<Report>) -> u8 {
    match result {
        Ok(report) if report.success() => 0,
        Ok(_) => 1,
        Err(err) => {
            fail(err);
            1
        }
    }
}

fn make_alphabet(args: &Args) -> Option<Alphabet> {
    match (&args.expression, &args.letters) {
        (Some(expr), _) => match parse(expr) {
            Ok(alphabet) => Some(alphabet),
            Err(err) => {
                err.display(expr);
                fail(&err);
                eprintln!("Usage: {USAGE}");
                None
            }
        },
        (None, Some(letters)) => build(letters, false).map_err(fail).ok(),
        (None, None) => Some(Alphabet::default())
    }
}

fn fail(err: impl Display) {
    eprintln!("{} {err}", "error:".red().bold());
}

fn program() -> String {
    std::env::args().next().unwrap_or_else(|| "dec2xyz".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Result<Args, u8> {
        parse_args(std::iter::once("dec2xyz").chain(argv.iter().copied()))
    }

    fn run(argv: &[&str], input: &str) -> (String, u8) {
        let session = session(&args(argv).unwrap()).unwrap();
        let mut out = Vec::new();
        let status = exit_status(&session.run(input.as_bytes(), &mut out));
        (String::from_utf8(out).unwrap(), status)
    }

    #[test]
    fn test_flags() {
        let a = args(&["-s1n", "-e", "[A-Z]"]).unwrap();
        assert!(a.spreadsheet && a.one_based && a.reverse && !a.trace);
        assert_eq!(a.expression.as_deref(), Some("[A-Z]"));
        assert_eq!(a.letters, None);

        let a = args(&["01"]).unwrap();
        assert_eq!(a.letters.as_deref(), Some("01"));
        assert!(!a.spreadsheet && !a.one_based && !a.reverse);
    }

    #[test]
    fn test_usage_status() {
        assert_eq!(args(&["-h"]).err(), Some(0));
        assert_eq!(args(&["--help"]).err(), Some(0));
        assert_eq!(args(&["-x"]).err(), Some(1));
        assert_eq!(args(&["-e"]).err(), Some(1));
        assert_eq!(args(&["-e", "[a-z]", "abc"]).err(), Some(1));
        assert_eq!(args(&["01", "ab"]).err(), Some(1));
    }

    #[test]
    fn test_alphabet_errors() {
        assert!(session(&args(&["-e", "[a-"]).unwrap()).is_none());
        assert!(session(&args(&["-e", "[a+z]"]).unwrap()).is_none());
        assert!(session(&args(&[""]).unwrap()).is_none());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(Report::default())), 1);
        assert_eq!(exit_status(&Ok(Report{converted: 0, skipped: 3})), 1);
        assert_eq!(exit_status(&Ok(Report{converted: 1, skipped: 3})), 0);
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(exit_status(&Err(err)), 1);
    }

    #[test]
    fn test_end_to_end() {
        assert_eq!(run(&[], ""), (String::new(), 1));
        assert_eq!(run(&["-e", "[0-9][A-F]"], "8 9 10 11\n"), ("8\n9\nA\nB\n".to_string(), 0));
        assert_eq!(run(&["-n", "-s", "-e", "[A-Z]"], "AAAA\n"), ("18278\n".to_string(), 0));
        assert_eq!(run(&["|"], "0 -1 3\n"), ("|\n\n".to_string(), 0));
        assert_eq!(run(&["-n", "01"], "2\n"), (String::new(), 1));
    }
}
