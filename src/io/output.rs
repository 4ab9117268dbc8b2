use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::CalculationResult;
use crate::formatting::{format_currency, format_percentage, FormattingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self { writer, config }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.config.color.should_use_color() {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            _ => text.to_string(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let rate = format_percentage(Some(result.effective_rate), 2);
        let label = self.paint(result.benchmark.label, result.benchmark.display.color);

        writeln!(self.writer, "Rate Analysis")?;
        writeln!(self.writer, "=============")?;
        writeln!(
            self.writer,
            "Business type:    {}",
            result.input.business_type.label()
        )?;
        writeln!(
            self.writer,
            "Monthly volume:   {}",
            format_currency(Some(result.input.monthly_volume))
        )?;
        writeln!(
            self.writer,
            "Monthly fees:     {}",
            format_currency(Some(result.input.monthly_fees))
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Effective rate:   {}  [{}]", rate, label)?;
        writeln!(self.writer, "{}", result.benchmark.message)?;
        writeln!(self.writer)?;

        if result.savings.monthly > 0.0 {
            writeln!(
                self.writer,
                "Proposed rate:    {}",
                format_percentage(Some(result.proposed_rate), 2)
            )?;
            writeln!(
                self.writer,
                "Monthly savings:  {}",
                format_currency(Some(result.savings.monthly))
            )?;
            writeln!(
                self.writer,
                "Annual savings:   {}",
                format_currency(Some(result.savings.annual))
            )?;
            if result.savings.rate_difference > 0.0 {
                writeln!(
                    self.writer,
                    "Save {} on every transaction",
                    format_percentage(Some(result.savings.rate_difference), 2)
                )?;
            }
        } else {
            writeln!(self.writer, "No savings proposal for this input.")?;
        }

        Ok(())
    }
}

/// Build a writer for the requested format, targeting a file when `output`
/// is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        // File output never colors
        OutputFormat::Terminal if output.is_some() => {
            Box::new(TerminalWriter::new(sink, FormattingConfig::plain()))
        }
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, formatting)),
    })
}
