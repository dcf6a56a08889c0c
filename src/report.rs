//! Coloured error reporting on stderr.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print `err` and its causes to stderr.
pub fn error(err: &anyhow::Error) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = write_error(&mut stderr, err);
}

fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_error<W: WriteColor>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "error")?;
    out.reset()?;
    writeln!(out, ": {err}")?;
    for cause in err.chain().skip(1) {
        writeln!(out, "  caused by: {cause}")?;
    }
    Ok(())
}
