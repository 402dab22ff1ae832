//! Line-oriented session over any reader/writer pair.
//!
//! Each input line is one command. The last displayed email is kept so
//! `copy` sends exactly what the user just saw, trimmed.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::context::read_template;
use crate::error::AppResult;
use crate::profiles::Record;
use crate::session::Session;

const PROMPT: &str = "> ";
const LOAD_FIRST: &str = "Please load a CSV file first";

const HELP: &str = "\
commands:
  load <path>            load a CSV roster
  next | n               show the next profile (wraps around)
  current | show         show the current profile
  find <last name>       show a profile by last name (any case)
  copy                   copy the displayed email to the clipboard
  clear                  clear the displayed email
  template               print the template
  template load <path>   replace the template from a file
  template reset         restore the built-in template
  status                 show position and loaded file
  quit | exit            leave";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, W: Write> {
    session: &'a mut Session,
    clipboard: &'a dyn Clipboard,
    out: W,
    displayed: String,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(session: &'a mut Session, clipboard: &'a dyn Clipboard, out: W) -> Self {
        Self {
            session,
            clipboard,
            out,
            displayed: String::new(),
        }
    }

    /// Text currently on display, as it would be copied.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        if self.session.current().is_some() {
            self.show_current()?;
        }

        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.execute(line.trim())? == Flow::Quit {
                return Ok(());
            }
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!(command = %command, "shell command");

        match command {
            "" => {}
            "load" => self.load(arg)?,
            "next" | "n" => self.next()?,
            "current" | "show" => self.show_current()?,
            "find" | "search" => self.find(arg)?,
            "copy" => self.copy()?,
            "clear" => self.displayed.clear(),
            "template" => self.template(arg)?,
            "status" => self.status()?,
            "help" | "?" => writeln!(self.out, "{HELP}")?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => writeln!(self.out, "unknown command `{other}`; type `help`")?,
        }

        Ok(Flow::Continue)
    }

    fn load(&mut self, arg: &str) -> AppResult<()> {
        if arg.is_empty() {
            writeln!(self.out, "usage: load <path>")?;
            return Ok(());
        }

        match self.session.load_file(Path::new(arg)) {
            Ok(count) => {
                writeln!(self.out, "Loaded {count} profiles")?;
                self.show_current()
            }
            Err(err) => {
                writeln!(self.out, "Error loading file: {err}")?;
                Ok(())
            }
        }
    }

    fn next(&mut self) -> AppResult<()> {
        if self.session.next().is_none() {
            writeln!(self.out, "{LOAD_FIRST}")?;
            return Ok(());
        }
        self.show_current()
    }

    fn show_current(&mut self) -> AppResult<()> {
        let Some(record) = self.session.current().cloned() else {
            writeln!(self.out, "{LOAD_FIRST}")?;
            return Ok(());
        };

        let (position, total) = self.session.store().position();
        writeln!(self.out, "Profile: {position}/{total}")?;
        self.display(&record)
    }

    fn find(&mut self, query: &str) -> AppResult<()> {
        if self.session.store().is_empty() {
            writeln!(self.out, "{LOAD_FIRST}")?;
            return Ok(());
        }

        match self.session.find_by_last_name(query).cloned() {
            Ok(record) => self.display(&record),
            Err(miss) => {
                writeln!(self.out, "No profile found for: {}", miss.query)?;
                writeln!(self.out, "Available names: {}", miss.candidates.join(", "))?;
                Ok(())
            }
        }
    }

    fn display(&mut self, record: &Record) -> AppResult<()> {
        match self.session.render(record) {
            Ok(text) => {
                writeln!(self.out, "{text}")?;
                self.displayed = text;
            }
            Err(err) => {
                warn!(error = %err, "template failed to render");
                self.displayed.clear();
                writeln!(self.out, "error: {err}")?;
            }
        }
        Ok(())
    }

    fn copy(&mut self) -> AppResult<()> {
        let text = self.displayed.trim();
        if text.is_empty() {
            writeln!(self.out, "Nothing to copy")?;
            return Ok(());
        }

        match self.clipboard.copy(text) {
            Ok(()) => writeln!(self.out, "Copied to clipboard!")?,
            Err(err) => writeln!(self.out, "error: {err}")?,
        }
        Ok(())
    }

    fn template(&mut self, arg: &str) -> AppResult<()> {
        let (action, path) = match arg.split_once(char::is_whitespace) {
            Some((action, path)) => (action, path.trim()),
            None => (arg, ""),
        };

        match (action, path) {
            ("", _) => writeln!(self.out, "{}", self.session.template())?,
            ("load", "") => writeln!(self.out, "usage: template load <path>")?,
            ("load", path) => match read_template(Path::new(path)) {
                Ok(text) => {
                    self.session.set_template(text);
                    self.template_updated()?;
                }
                Err(err) => writeln!(self.out, "Template not changed: {err}")?,
            },
            ("reset", _) => {
                self.session.reset_template();
                self.template_updated()?;
            }
            (other, _) => writeln!(self.out, "unknown template action `{other}`")?,
        }
        Ok(())
    }

    fn template_updated(&mut self) -> AppResult<()> {
        writeln!(self.out, "Email template updated successfully!")?;
        if self.session.current().is_some() {
            self.show_current()?;
        }
        Ok(())
    }

    fn status(&mut self) -> AppResult<()> {
        let (position, total) = self.session.store().position();
        writeln!(self.out, "Profile: {position}/{total}")?;

        match self.session.source_path() {
            Some(path) => writeln!(self.out, "File: {}", path.display())?,
            None => writeln!(self.out, "No file selected")?,
        }
        Ok(())
    }
}

/// Runs the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    clipboard: &dyn Clipboard,
    input: R,
    out: W,
) -> AppResult<()> {
    Shell::new(session, clipboard, out).run(input)
}
