//! Command driver for an MTree of integers.
//!
//! Input (whitespace separated, on stdin):
//!
//! ```text
//! n  v1 .. vn      initial strictly ascending values
//! M                children per node
//! c                number of commands
//! I v | R v | F v | B
//! ```
//!
//! `I` inserts, `R` removes, `F` finds, and `B` collects every value and
//! rebuilds the tree from them. The final contents are printed at the end,
//! twenty to a line; a partial last line is not terminated.

use std::io::{self, Read, Write};
use std::str::SplitWhitespace;

use mtree::{MTree, MTreeError};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("unexpected end of input, expected {0}")]
    MissingToken(&'static str),
    #[error("expected {what}, found {token:?}")]
    BadInteger { what: &'static str, token: String },
    #[error("initial values must be strictly ascending")]
    Unsorted,
    #[error(transparent)]
    Tree(#[from] MTreeError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&'a str, CliError> {
        self.inner.next().ok_or(CliError::MissingToken(what))
    }

    fn next_int<N: std::str::FromStr>(&mut self, what: &'static str) -> Result<N, CliError> {
        let token = self.next_token(what)?;
        parse_int(token, what)
    }
}

fn parse_int<N: std::str::FromStr>(token: &str, what: &'static str) -> Result<N, CliError> {
    token.parse().map_err(|_| CliError::BadInteger {
        what,
        token: token.to_string(),
    })
}

fn main() {
    let mut input = String::new();
    let stdout = io::stdout();
    let result = io::stdin()
        .read_to_string(&mut input)
        .map_err(CliError::from)
        .and_then(|_| run(&input, &mut stdout.lock()));

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(input: &str, out: &mut impl Write) -> Result<(), CliError> {
    let mut tokens = Tokens::new(input);

    let n: usize = tokens.next_int("value count")?;
    let values = (0..n)
        .map(|_| tokens.next_int::<i64>("initial value"))
        .collect::<Result<Vec<_>, _>>()?;
    if !values.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(CliError::Unsorted);
    }

    let capacity: usize = tokens.next_int("capacity")?;
    let mut tree = MTree::from_sorted(capacity, &values)?;

    let commands: usize = tokens.next_int("command count")?;
    for _ in 0..commands {
        let token = tokens.next_token("command")?;
        let mut chars = token.chars();
        let command = chars.next().unwrap_or_default();
        // Accept both "I 5" and "I5".
        let attached = chars.as_str();

        match command {
            'I' => {
                let value = command_argument(&mut tokens, attached)?;
                match tree.insert(value) {
                    Ok(()) => writeln!(out, "The value = {} has been inserted.", value)?,
                    Err(MTreeError::DuplicateKey) => {
                        writeln!(out, "The value = {} already in the tree.", value)?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            'R' => {
                let value = command_argument(&mut tokens, attached)?;
                match tree.remove(&value) {
                    Ok(()) => writeln!(out, "The value = {} has been removed.", value)?,
                    Err(MTreeError::NotFound) => {
                        writeln!(out, "The value = {} not found.", value)?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            'F' => {
                let value = command_argument(&mut tokens, attached)?;
                if tree.search(&value) {
                    writeln!(out, "The element with value = {} was found.", value)?;
                } else {
                    writeln!(out, "The element with value = {} not found.", value)?;
                }
            }
            'B' => {
                tree.rebalance();
                writeln!(out, "The tree has been rebuilt.")?;
            }
            _ => writeln!(out, "Invalid command.")?,
        }
    }

    write_final_list(&tree, out)?;
    Ok(())
}

fn command_argument(tokens: &mut Tokens<'_>, attached: &str) -> Result<i64, CliError> {
    if attached.is_empty() {
        tokens.next_int("command argument")
    } else {
        parse_int(attached, "command argument")
    }
}

fn write_final_list(tree: &MTree<i64>, out: &mut impl Write) -> io::Result<()> {
    write!(out, "Final list: ")?;
    for (i, value) in tree.values().enumerate() {
        write!(out, "{} ", value)?;
        if (i + 1) % 20 == 0 {
            writeln!(out)?;
        }
    }
    out.flush()
}
