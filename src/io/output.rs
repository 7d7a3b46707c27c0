//! Assessment writers for the presentation boundary.

use clap::ValueEnum;
use colored::*;
use std::io::Write;

use crate::core::{Assessment, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, output: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(output)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(output)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(output)),
    }
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
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(assessment)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_section(&mut self, title: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# Portfolio Assessment: {}", assessment.username)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            assessment.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Overall score: {}/100**", assessment.overall_score)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Score Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Score |")?;
        writeln!(self.writer, "|----------|-------|")?;
        for (category, score) in assessment.score_breakdown.scores() {
            writeln!(self.writer, "| {category} | {score} |")?;
        }
        writeln!(self.writer)?;

        self.write_section("Strengths", &assessment.strengths)?;
        self.write_section("Weaknesses", &assessment.weaknesses)?;

        if !assessment.recommendations.is_empty() {
            writeln!(self.writer, "## Recommendations")?;
            writeln!(self.writer)?;
            for (i, rec) in assessment.recommendations.iter().enumerate() {
                writeln!(self.writer, "{}. {rec}", i + 1)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn colored_score(score: u32) -> ColoredString {
        let text = format!("{score:>3}");
        if score >= 75 {
            text.green()
        } else if score >= 50 {
            text.yellow()
        } else {
            text.red()
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, assessment: &Assessment) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Profile:".bold(),
            assessment.profile_data.name
        )?;
        writeln!(
            self.writer,
            "{} {}/100",
            "Overall:".bold(),
            Self::colored_score(assessment.overall_score)
        )?;
        writeln!(self.writer)?;

        for category in Category::ALL {
            let score = assessment.score_breakdown.get(category);
            writeln!(
                self.writer,
                "  {} {:<24}",
                Self::colored_score(score),
                category.label()
            )?;
        }

        if !assessment.strengths.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Strengths".bold().green())?;
            for s in &assessment.strengths {
                writeln!(self.writer, "  + {s}")?;
            }
        }
        if !assessment.weaknesses.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Weaknesses".bold().red())?;
            for w in &assessment.weaknesses {
                writeln!(self.writer, "  - {w}")?;
            }
        }
        if !assessment.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Recommended next steps".bold())?;
            for (i, rec) in assessment.recommendations.iter().enumerate() {
                writeln!(self.writer, "  {}. {rec}", i + 1)?;
            }
        }
        Ok(())
    }
}
