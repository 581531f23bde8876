//! pwd-criteria - checks one password read from stdin and prints the report.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use pwd_criteria::assess_password_strength;
use secrecy::SecretString;

const PROMPT: &str = "Enter a password to check its strength: ";

/// Reads a password from stdin and reports which strength rules it fails.
///
/// Only the first whitespace-delimited token is evaluated. The exit code is 0
/// for both strong and weak passwords.
#[derive(Parser, Debug)]
#[command(name = "pwd-criteria", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("{}", PROMPT);
        io::stderr().flush().context("failed to flush prompt")?;
    }

    let token = read_token(stdin.lock()).context("failed to read password from stdin")?;
    let password = SecretString::new(token.into());

    let feedback = assess_password_strength(&password);
    println!("{}", feedback);

    Ok(())
}

/// Whitespace as the C locale sees it, vertical tab included.
fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}

/// Returns the first whitespace-delimited token, skipping blank lines.
///
/// Reads line by line and stops at the first line holding a token, so an
/// interactive user is never asked for more than needed. Invalid UTF-8 is
/// replaced rather than rejected. Yields an empty string at EOF.
fn read_token<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(String::new());
        }

        if let Some(token) = line.split(|&b| is_separator(b)).find(|t| !t.is_empty()) {
            return Ok(String::from_utf8_lossy(token).into_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_token_skips_blank_lines() {
        let token = read_token(&b"\n\n  Abc12345!\n"[..]).unwrap();
        assert_eq!(token, "Abc12345!");
    }

    #[test]
    fn test_read_token_first_of_many() {
        let token = read_token(&b"\tPASSWORD1! lowercase\nother\n"[..]).unwrap();
        assert_eq!(token, "PASSWORD1!");
    }

    #[test]
    fn test_read_token_without_trailing_newline() {
        assert_eq!(read_token(&b"Sp3c!al_"[..]).unwrap(), "Sp3c!al_");
    }

    #[test]
    fn test_read_token_empty_and_whitespace_only() {
        assert_eq!(read_token(&b""[..]).unwrap(), "");
        assert_eq!(read_token(&b" \r\n\x0b\x0c\n"[..]).unwrap(), "");
    }

    #[test]
    fn test_read_token_invalid_utf8_is_replaced() {
        let token = read_token(&b"pa\xE9ss\n"[..]).unwrap();
        assert_eq!(token, "pa\u{FFFD}ss");
    }
}
