//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use debatemap_domain::{DebateGraph, Statement};
use debatemap_layout::Layout;
use debatemap_store::Snapshot;
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of statements.
    ///
    /// JSON output reuses the snapshot node records, so it matches what the
    /// map file stores.
    pub fn format_statements(&self, graph: &DebateGraph, statements: &[&Statement]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_statements_json(graph, statements),
            OutputFormat::Table => Ok(self.format_statements_table(graph, statements)),
            OutputFormat::Quiet => Ok(statements
                .iter()
                .map(|s| s.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_statements_json(&self, graph: &DebateGraph, statements: &[&Statement]) -> Result<String> {
        let wanted: BTreeSet<&str> = statements.iter().map(|s| s.id.as_str()).collect();
        let nodes: Vec<_> = Snapshot::from_graph(graph)
            .nodes
            .into_iter()
            .filter(|node| wanted.contains(node.id.as_str()))
            .collect();
        Ok(serde_json::to_string_pretty(&nodes)?)
    }

    fn format_statements_table(&self, graph: &DebateGraph, statements: &[&Statement]) -> String {
        if statements.is_empty() {
            return self.colorize("No statements found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Participant", "Strength", "Title", "Parent"]);

        for statement in statements {
            let strength = statement.strength.map(|s| s.to_string()).unwrap_or_default();
            let parent = graph.parent_of(&statement.id).map(|p| p.to_string()).unwrap_or_default();
            let mut title = statement.title.clone();
            if statement.collapsed {
                title.push_str(" [+]");
            }
            builder.push_record([
                statement.id.to_string(),
                statement.kind.to_string(),
                statement.participant.to_string(),
                strength,
                title,
                parent,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format computed positions (top-left corners).
    pub fn format_layout(&self, layout: &Layout) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let positions: serde_json::Map<String, serde_json::Value> = layout
                    .iter()
                    .map(|(id, point)| (id.to_string(), serde_json::json!({ "x": point.x, "y": point.y })))
                    .collect();
                Ok(serde_json::to_string_pretty(&positions)?)
            }
            OutputFormat::Quiet => Ok(layout
                .iter()
                .map(|(id, point)| format!("{} {} {}", id, point.x, point.y))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if layout.is_empty() {
                    return Ok(self.colorize("Nothing to lay out.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "X", "Y"]);
                for (id, point) in layout.iter() {
                    builder.push_record([id.to_string(), format!("{:.1}", point.x), format!("{:.1}", point.y)]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the participant registry.
    pub fn format_participants(&self, graph: &DebateGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Snapshot::from_graph(graph).participants)?),
            OutputFormat::Quiet => Ok(graph
                .participants
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if graph.participants.is_empty() {
                    return Ok(self.colorize("No participants.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Color", "Statements"]);
                for participant in &graph.participants {
                    let count = graph
                        .statements
                        .iter()
                        .filter(|s| s.participant == participant.id)
                        .count();
                    let color = graph.participant_color(&participant.id).unwrap_or_default();
                    builder.push_record([
                        participant.id.to_string(),
                        self.paint(&participant.name, color),
                        color.to_string(),
                        count.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Print a created or changed id in quiet mode, a message otherwise.
    pub fn outcome(&self, id: &str, message: &str) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            OutputFormat::Json => serde_json::json!({ "id": id, "message": message }).to_string(),
            OutputFormat::Table => self.success(message),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }

    /// Paint text in a `#rrggbb` palette color if color is enabled.
    fn paint(&self, text: &str, hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) if self.color_enabled => text.truecolor(r, g, b).to_string(),
            _ => text.to_string(),
        }
    }
}

/// Parse a `#rrggbb` color.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
