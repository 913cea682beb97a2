//! Report rendering.

use crate::cli::OutputFormat;
use crate::engine::protocol::{Finding, Report};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

pub fn write_report<W: Write>(format: OutputFormat, report: &Report, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Text => write_text(report, out),
    }
}

fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

fn write_text<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    if report.is_clean() {
        writeln!(out, "{}", "No issues found.".green())?;
        return Ok(());
    }
    if !report.messages.is_empty() {
        let headline = format!("Found {} issue(s):", report.messages.len());
        writeln!(out, "{}", headline.red())?;
        for finding in &report.messages {
            writeln!(out, "- {}", describe(finding))?;
        }
    }
    if !report.unused_dependencies.is_empty() {
        if !report.messages.is_empty() {
            writeln!(out)?;
        }
        writeln!(out, "Unused dependencies:")?;
        for dependency in &report.unused_dependencies {
            writeln!(out, "- {}", dependency.0)?;
        }
    }
    Ok(())
}

fn describe(finding: &Finding) -> String {
    match (&finding.kind, &finding.file) {
        (Some(kind), Some(file)) => format!("{kind} ({file})"),
        (Some(kind), None) => kind.clone(),
        (None, Some(file)) => format!("finding in {file}"),
        (None, None) => "finding".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::protocol::DependencyRef;
    use pretty_assertions::assert_eq;

    fn render(format: OutputFormat, report: &Report) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_report(format, report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clean_report_renders_single_line() {
        let text = render(OutputFormat::Text, &Report::default());
        assert_eq!(text, "No issues found.\n");
    }

    #[test]
    fn findings_and_unused_dependencies_are_listed() {
        let report = Report {
            messages: vec![Finding {
                kind: Some("UnusedVariable".to_string()),
                file: Some("src/Main.elm".to_string()),
                ..Finding::default()
            }],
            unused_dependencies: vec![DependencyRef("elm-lang/html".to_string())],
        };
        let text = render(OutputFormat::Text, &report);
        assert!(text.contains("Found 1 issue(s):"));
        assert!(text.contains("- UnusedVariable (src/Main.elm)"));
        assert!(text.contains("- elm-lang/html"));
    }

    #[test]
    fn json_output_keeps_wire_key_casing() {
        let text = render(OutputFormat::Json, &Report::default());
        assert!(text.contains("\"unusedDependencies\""));
    }
}
