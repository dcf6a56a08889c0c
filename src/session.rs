//! Line-command interpreter shared by the `tlist repl` loop and piped input.
//!
//! A session holds at most one list of [`Value`]s and one [`Optional`]. Each
//! line is one command; output goes to the writer passed to
//! [`Session::execute`].

use std::io::Write;

use tracing::debug;

use crate::config::{DisplayConfig, DisplayFormat};
use crate::data::Value;
use crate::error::{Error, Result};
use crate::linked_list::LinkedList;
use crate::optional::Optional;

const HELP: &str = "\
commands:
  new <value>        start a new list
  add <value>        append to the list
  head               print the first value
  display            print the list
  len                print the number of nodes
  json               print the list as a JSON array
  opt [value]        set the optional (empty without a value)
  opt?               print the optional
  transform <value>  string length or rounded number
  kind <value>       print `number` or `string`
  help               show this message
  exit | quit        leave the session";

/// Whether the caller should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One list and one optional driven by text commands.
pub struct Session {
    list: Option<LinkedList<Value>>,
    optional: Optional<Value>,
    format: DisplayFormat,
    separator: String,
}

impl Session {
    /// Create a session using the display settings from the config.
    pub fn new(display: &DisplayConfig) -> Self {
        Self::with_format(display.format(), display.separator())
    }

    /// Create a session with an explicit output format and separator.
    pub fn with_format(format: DisplayFormat, separator: &str) -> Self {
        Self {
            list: None,
            optional: Optional::empty(),
            format,
            separator: separator.to_string(),
        }
    }

    /// The current list, if one was started.
    pub fn list(&self) -> Option<&LinkedList<Value>> {
        self.list.as_ref()
    }

    /// The current optional.
    pub fn optional(&self) -> &Optional<Value> {
        &self.optional
    }

    /// Run one command line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        debug!(command = word, argument = rest, "executing");

        match word {
            "new" => {
                let value = Value::parse(required(rest, "new <value>")?)?;
                self.list = Some(LinkedList::new(value));
            }
            "add" => {
                let value = Value::parse(required(rest, "add <value>")?)?;
                self.list_mut()?.add(value);
            }
            "head" => writeln!(out, "{}", self.current()?.head())?,
            "display" => write_list(self.current()?, self.format, &self.separator, out)?,
            "len" => writeln!(out, "{}", self.current()?.len())?,
            "json" => write_list(self.current()?, DisplayFormat::Json, &self.separator, out)?,
            "opt" => {
                self.optional = if rest.is_empty() {
                    Optional::empty()
                } else {
                    Optional::of(Value::parse(rest)?)
                };
            }
            "opt?" => {
                writeln!(out, "{}", describe_optional(&self.optional))?;
                writeln!(out, "present: {}", self.optional.has_value())?;
            }
            "transform" => {
                let value = Value::parse(required(rest, "transform <value>")?)?;
                writeln!(out, "{}", Value::Number(value.transform()))?;
            }
            "kind" => {
                let value = Value::parse(required(rest, "kind <value>")?)?;
                writeln!(out, "{}", value.kind())?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "exit" | "quit" => return Ok(Flow::Exit),
            other => return Err(Error::UnknownCommand(other.to_string())),
        }
        Ok(Flow::Continue)
    }

    fn current(&self) -> Result<&LinkedList<Value>> {
        self.list.as_ref().ok_or(Error::NoList)
    }

    fn list_mut(&mut self) -> Result<&mut LinkedList<Value>> {
        self.list.as_mut().ok_or(Error::NoList)
    }
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(Error::MissingArgument(usage))
    } else {
        Ok(rest)
    }
}

/// Write `list` in the given format.
pub fn write_list<W: Write>(
    list: &LinkedList<Value>,
    format: DisplayFormat,
    separator: &str,
    out: &mut W,
) -> Result<()> {
    match format {
        DisplayFormat::Lines => list.display_to(out)?,
        DisplayFormat::Inline => writeln!(out, "{}", list.render(separator))?,
        DisplayFormat::Json => {
            serde_json::to_writer(&mut *out, list)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Object form of an optional, with string payloads quoted.
pub fn describe_optional(optional: &Optional<Value>) -> String {
    match optional.value() {
        Some(Value::String(s)) => format!("{{ value: {} }}", quote(s)),
        _ => optional.to_string(),
    }
}

/// Quote a string the way Node's inspector does: single quotes unless the
/// text contains one, then double quotes, then backticks, and finally single
/// quotes with escaping.
fn quote(s: &str) -> String {
    if !s.contains('\'') {
        format!("'{s}'")
    } else if !s.contains('"') {
        format!("\"{s}\"")
    } else if !s.contains('`') {
        format!("`{s}`")
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}
