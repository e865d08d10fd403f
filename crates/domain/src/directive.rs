//! Parser for the echo directive block.
//!
//! ```text
//! {
//!     domain echo.example.com
//!     ttl 60
//!     debug
//! }
//! ```
//!
//! Directive names are case-insensitive, one directive per line. Braces and
//! `#` comments are ignored.

use crate::echo_config::{EchoConfig, EchoConfigError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("line {line}: unknown directive '{name}'")]
    UnknownDirective { line: usize, name: String },

    #[error("line {line}: '{name}' requires an argument")]
    MissingArgument { line: usize, name: String },

    #[error("line {line}: unexpected argument '{arg}' for '{name}'")]
    UnexpectedArgument {
        line: usize,
        name: String,
        arg: String,
    },

    #[error(transparent)]
    Invalid(#[from] EchoConfigError),
}

/// Raw, tokenized directives before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoDirectives {
    pub domains: Vec<String>,
    pub ttl: Option<String>,
    pub debug: bool,
}

impl EchoDirectives {
    pub fn parse(input: &str) -> Result<Self, DirectiveError> {
        let mut directives = Self::default();

        for (index, raw_line) in input.lines().enumerate() {
            let line = index + 1;
            let content = raw_line.split('#').next().unwrap_or_default();
            let mut tokens = content
                .split_whitespace()
                .filter(|token| *token != "{" && *token != "}");

            let Some(name) = tokens.next() else {
                continue;
            };
            let args: Vec<&str> = tokens.collect();

            if name.eq_ignore_ascii_case("domain") {
                if args.is_empty() {
                    return Err(missing(line, name));
                }
                directives
                    .domains
                    .extend(args.iter().map(|arg| arg.to_string()));
            } else if name.eq_ignore_ascii_case("ttl") {
                match args.as_slice() {
                    [] => return Err(missing(line, name)),
                    [ttl] => directives.ttl = Some(ttl.to_string()),
                    [_, extra, ..] => return Err(unexpected(line, name, extra)),
                }
            } else if name.eq_ignore_ascii_case("debug") {
                if let Some(extra) = args.first() {
                    return Err(unexpected(line, name, extra));
                }
                directives.debug = true;
            } else {
                return Err(DirectiveError::UnknownDirective {
                    line,
                    name: name.to_string(),
                });
            }
        }

        Ok(directives)
    }

    pub fn into_config(self) -> Result<EchoConfig, DirectiveError> {
        Ok(EchoConfig::build(
            &self.domains,
            self.ttl.as_deref(),
            self.debug,
        )?)
    }
}

impl EchoConfig {
    /// Parses and validates a directive block in one step.
    pub fn from_directives(input: &str) -> Result<Self, DirectiveError> {
        EchoDirectives::parse(input)?.into_config()
    }
}

fn missing(line: usize, name: &str) -> DirectiveError {
    DirectiveError::MissingArgument {
        line,
        name: name.to_lowercase(),
    }
}

fn unexpected(line: usize, name: &str, arg: &str) -> DirectiveError {
    DirectiveError::UnexpectedArgument {
        line,
        name: name.to_lowercase(),
        arg: arg.to_string(),
    }
}
