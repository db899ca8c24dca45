use crate::error::Result;
use crate::interfaces::screen::ScreenUpdate;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per screen state.
    #[default]
    Text,
    /// One JSON object per screen update.
    Json,
}

/// Writes screen updates to any `Write` sink (e.g., Stdout).
pub struct ScreenWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ScreenWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_update(&mut self, update: &ScreenUpdate) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(update)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, update)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_text(&mut self, update: &ScreenUpdate) -> Result<()> {
        if let Some(alert) = &update.alert {
            writeln!(
                self.writer,
                "ALERT {}: {} [{}]",
                alert.title, alert.message, alert.dismiss
            )?;
        }
        let view = &update.view;
        write!(
            self.writer,
            "bill={} | {} | tip={} | total={}",
            view.bill_field, view.tip_percent_label, view.tip_amount_label, view.total_label
        )?;
        if view.editing {
            write!(self.writer, " (editing)")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
