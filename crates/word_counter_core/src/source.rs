use std::convert::Infallible;
use std::io::{self, BufRead};

/// Supplier of document lines.
///
/// `Ok(None)` signals end of stream; once returned, every later call returns
/// it too. Lines never include their terminator.
pub trait LineSource {
    type Error;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error>;
}

/// Line source over any buffered reader.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    type Error = io::Error;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        if self.finished {
            return Ok(None);
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.finished = true;
            return Ok(None);
        }
        strip_terminator(&mut line);
        Ok(Some(line))
    }
}

/// Line source over a document already held in memory.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> TextLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl LineSource for TextLines<'_> {
    type Error = Infallible;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.lines.next().map(str::to_owned))
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
