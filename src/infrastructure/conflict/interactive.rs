//! Interactive Overwrite Confirmer
//!
//! Asks the operator on stdout and reads a single answer line from stdin.

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::Path;

use crate::domain::ports::OverwriteConfirmer;

/// Line-based confirmer.
///
/// Only `y` or `Y` (surrounding whitespace ignored) confirms. Anything else,
/// end of input, or a read error is a refusal.
pub struct LineConfirmer<R, W> {
    io: RefCell<(R, W)>,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: RefCell::new((reader, writer)),
        }
    }

    /// Give back the reader and writer (for inspecting a test transcript)
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

impl LineConfirmer<BufReader<Stdin>, Stdout> {
    /// Confirmer bound to the process's stdin/stdout.
    ///
    /// Holds no stdin lock between prompts, so earlier prompts may read
    /// from stdin too.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwriteConfirmer for LineConfirmer<R, W> {
    fn confirm_overwrite(&self, root: &Path) -> bool {
        let mut io = self.io.borrow_mut();
        let (reader, writer) = &mut *io;

        let _ = write!(
            writer,
            "{} already exists. Overwrite existing files? [y/n]: ",
            root.display()
        );
        let _ = writer.flush();

        let mut answer = String::new();
        match reader.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        }
    }
}
