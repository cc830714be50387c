//! Output formatting

use std::io::Write;

use anyhow::Result;
use silabea_core::Analysis;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one word per line
    Text,
    /// JSON array of analysis records
    Json,
}

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the syllables of one word, joined by the separator
    pub fn syllables(&mut self, analysis: &Analysis, separator: &str) -> Result<()> {
        writeln!(self.writer, "{}", analysis.syllables.join(separator))?;
        Ok(())
    }

    /// Write the stress index of one word
    pub fn stress(&mut self, stress: i32) -> Result<()> {
        writeln!(self.writer, "{stress}")?;
        Ok(())
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl TextFormatter<std::io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// JSON formatter - outputs one array of analysis records
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Analysis>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }

    /// Queue one analysis record
    pub fn record(&mut self, analysis: Analysis) {
        self.records.push(analysis);
    }

    /// Write the collected array and flush
    pub fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl JsonFormatter<std::io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Analysis {
        Analysis {
            word: "casa".to_string(),
            syllables: vec!["ca".to_string(), "sa".to_string()],
            stress: Some(-2),
        }
    }

    #[test]
    fn text_syllables_join_with_separator() {
        let mut out = Vec::new();
        let mut formatter = TextFormatter::new(&mut out);
        formatter.syllables(&sample(), "-").unwrap();
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ca-sa\n");
    }

    #[test]
    fn text_stress_prints_the_index() {
        let mut out = Vec::new();
        let mut formatter = TextFormatter::new(&mut out);
        formatter.stress(-2).unwrap();
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-2\n");
    }

    #[test]
    fn json_emits_an_array_of_records() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out);
        formatter.record(sample());
        formatter.finish().unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('['));
        assert!(text.contains("\"word\": \"casa\""));
        assert!(text.contains("\"stress\": -2"));
    }
}
