/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::renderer::Renderer;
use crate::shared::Notification;

/**
 * Emits notifications as JSON lines, one object per notification.
 *
 * Intended for an out-of-process display that tails the stream. Write errors are
 * logged and otherwise ignored; the interpreter never sees them.
 */
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> JsonRenderer<W> {
        JsonRenderer { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, notification: &Notification) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, notification)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn notify(&mut self, notification: &Notification) {
        if let Err(e) = self.write_line(notification) {
            log::error!("failed to write notification: {}", e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            log::error!("failed to flush notifications: {}", e);
        }
    }
}

/// Destination for JSON lines: `path` when given, stderr otherwise. Stdout is
/// left to the pass-through lines.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stderr())),
    }
}
