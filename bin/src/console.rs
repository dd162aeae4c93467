use std::fmt::Display;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Stdin;
use std::io::Stdout;
use std::io::Write;

/// Line-oriented prompting over any reader/writer pair.
///
/// Generic over [`BufRead`] and [`Write`] so games can run against stdin and
/// stdout in production and against in-memory buffers in tests.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// A console wired to stdin and stdout.
    pub fn from_stdio() -> Console<BufReader<Stdin>, Stdout> {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Console<R, W> {
        Console { reader, writer }
    }

    /// Writes one line of output.
    pub fn write_line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    /// Prompts until the user enters exactly `length` characters, then
    /// returns the input uppercased.
    pub fn prompt_word(&mut self, prompt: &str, length: usize) -> io::Result<String> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;
            let input = self.read_trimmed_line()?;
            if input.chars().count() != length {
                writeln!(self.writer, "Input must have a length of {length} characters.")?;
                continue;
            }
            return Ok(input.to_uppercase());
        }
    }

    /// Asks a yes/no question, suffixed with the accepted answers.
    ///
    /// Any answer starting with `y` or `n` counts, case-insensitively. An
    /// empty answer takes `default` when one is given; anything else asks
    /// again.
    pub fn prompt_yes_no(&mut self, prompt: &str, default: Option<bool>) -> io::Result<bool> {
        let options = match default {
            Some(true) => "Y/n",
            Some(false) => "y/N",
            None => "y/n",
        };
        loop {
            write!(self.writer, "{prompt} [{options}] ")?;
            self.writer.flush()?;
            let answer = self.read_trimmed_line()?.to_lowercase();
            match (answer.chars().next(), default) {
                (Some('y'), _) => return Ok(true),
                (Some('n'), _) => return Ok(false),
                (None, Some(choice)) => return Ok(choice),
                _ => continue,
            }
        }
    }

    /// Unwraps the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_trimmed_line(&mut self) -> io::Result<String> {
        let mut buffer = String::new();
        let num_read = self.reader.read_line(&mut buffer)?;
        if num_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(buffer.trim().to_string())
    }
}
