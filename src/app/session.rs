use std::io::{BufRead, Write};

use crate::config::{CliConfig, OutputFormat};
use crate::core::generator::ProductGenerator;
use crate::core::parser::SetParser;
use crate::domain::model::SetElement;

/// Interactive console loop around the parse → validate → generate core.
/// Generic over its streams so a whole session can run against in-memory
/// buffers in tests.
pub struct ProductSession<R: BufRead, W: Write> {
    parser: SetParser,
    generator: ProductGenerator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ProductSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            parser: SetParser::new(),
            generator: ProductGenerator::new(),
            input,
            output,
        }
    }

    /// Drive the session until the user declines to continue, or once in
    /// one-shot mode (both sets supplied via configuration). Parse failures
    /// on prompted input are reported and re-prompted; failures on
    /// configured input propagate so the process can exit non-zero.
    pub fn run(&mut self, config: &CliConfig) -> anyhow::Result<()> {
        let one_shot = config.set_a.is_some() && config.set_b.is_some();

        if config.format == OutputFormat::Table && !one_shot {
            writeln!(self.output, "===========================================")?;
            writeln!(self.output, "   CARTESIAN PRODUCT GENERATOR")?;
            writeln!(self.output, "===========================================")?;
        }

        loop {
            let set_a = self.obtain_set(config.set_a.as_deref(), "A")?;
            let set_b = self.obtain_set(config.set_b.as_deref(), "B")?;

            match config.format {
                OutputFormat::Table => self.render_table(&set_a, &set_b, config.detailed)?,
                OutputFormat::Json => self.render_json(&set_a, &set_b)?,
            }

            if one_shot || !self.offer_to_continue()? {
                break;
            }
        }

        Ok(())
    }

    fn obtain_set(
        &mut self,
        provided: Option<&str>,
        set_name: &str,
    ) -> anyhow::Result<Vec<SetElement>> {
        if let Some(raw) = provided {
            return Ok(self.parser.parse_set(raw, set_name)?);
        }

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter elements of Set {} (comma-separated):",
            set_name
        )?;

        loop {
            write!(self.output, "Set {}: ", set_name)?;
            self.output.flush()?;

            let mut line = String::new();
            let bytes = self.input.read_line(&mut line)?;
            anyhow::ensure!(bytes > 0, "input ended before set {} was provided", set_name);

            match self.parser.parse_set(&line, set_name) {
                Ok(elements) => return Ok(elements),
                Err(e) => {
                    tracing::warn!("Rejected input for set {}: {}", set_name, e);
                    writeln!(self.output, "Error: {}", e)?;
                    writeln!(self.output, "Please try again with valid input.")?;
                }
            }
        }
    }

    fn echo_set(&mut self, set_name: &str, elements: &[SetElement]) -> anyhow::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Set {} = {}",
            set_name,
            self.parser.format_set(elements)
        )?;
        writeln!(self.output, "Cardinality: {}", elements.len())?;

        // Duplicates are allowed; the advisory lives here, not in the parser.
        if self.parser.has_duplicates(elements) {
            tracing::warn!("Set {} contains duplicate elements", set_name);
            writeln!(
                self.output,
                "Warning: Set {} contains duplicate elements. In mathematical sets, duplicates are typically ignored.",
                set_name
            )?;
        }

        Ok(())
    }

    fn render_table(
        &mut self,
        set_a: &[SetElement],
        set_b: &[SetElement],
        detailed: bool,
    ) -> anyhow::Result<()> {
        self.echo_set("A", set_a)?;
        self.echo_set("B", set_b)?;

        writeln!(self.output)?;
        writeln!(self.output, "Generating Cartesian Product A × B...")?;
        writeln!(self.output)?;

        let product = self.generator.generate(Some(set_a), Some(set_b))?;
        let expected = self.generator.cardinality(Some(set_a), Some(set_b));

        writeln!(self.output, "===========================================")?;
        writeln!(self.output, "CARTESIAN PRODUCT RESULT")?;
        writeln!(self.output, "===========================================")?;
        writeln!(
            self.output,
            "Total pairs: {} (expected: {} × {} = {})",
            product.len(),
            set_a.len(),
            set_b.len(),
            expected
        )?;
        writeln!(self.output)?;

        writeln!(self.output, "A × B = {{")?;
        for (index, pair) in product.iter().enumerate() {
            let rendered = if detailed {
                pair.detailed()
            } else {
                pair.to_string()
            };
            if index + 1 < product.len() {
                writeln!(self.output, "  {},", rendered)?;
            } else {
                writeln!(self.output, "  {}", rendered)?;
            }
        }
        writeln!(self.output, "}}")?;

        writeln!(self.output)?;
        writeln!(self.output, "{}", self.generator.statistics(&product))?;

        Ok(())
    }

    fn render_json(&mut self, set_a: &[SetElement], set_b: &[SetElement]) -> anyhow::Result<()> {
        let product = self.generator.generate(Some(set_a), Some(set_b))?;
        let statistics = self.generator.statistics(&product);

        let report = serde_json::json!({
            "set_a": set_a,
            "set_b": set_b,
            "cardinality": self.generator.cardinality(Some(set_a), Some(set_b)),
            "pairs": product,
            "statistics": statistics,
        });

        writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
        Ok(())
    }

    fn offer_to_continue(&mut self) -> anyhow::Result<bool> {
        writeln!(self.output)?;
        write!(self.output, "Generate another Cartesian product? (y/n): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let response = line.trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }
}
