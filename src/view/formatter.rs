use super::{NodeView, ViewContent};
use crate::checklist::{ChecklistEntry, StepStatus};
use ahash::AHashMap;
use itertools::Itertools;

/// Formats session projections into plain text for terminal front ends.
pub struct ViewFormatter;

impl ViewFormatter {
    /// Renders the current node: header, content, then the numbered transitions.
    pub fn format_view(view: &NodeView) -> String {
        let mut lines = Vec::new();
        match view.step {
            Some(step) => lines.push(format!(
                "{} (step {} of {})",
                view.title, step.number, step.total
            )),
            None => lines.push(view.title.clone()),
        }

        match &view.content {
            ViewContent::Decision { question } => lines.push(question.clone()),
            ViewContent::Action {
                description,
                commands,
                inputs,
            } => {
                lines.extend(description.clone());
                for command in commands {
                    let mark = if command.completed { 'x' } else { ' ' };
                    lines.push(format!("  [{}] {}. {}", mark, command.index + 1, command.text));
                }
                for input in inputs {
                    let required = if input.spec.required { " *" } else { "" };
                    let shown = input
                        .value
                        .as_deref()
                        .or(input.spec.default.as_deref())
                        .unwrap_or("");
                    lines.push(format!(
                        "  {}{} ({}) = {}",
                        input.spec.label, required, input.spec.id, shown
                    ));
                    for issue in &input.issues {
                        lines.push(format!("      ! {}", issue));
                    }
                }
            }
            ViewContent::End { description } => {
                lines.push("Finished.".to_string());
                lines.extend(description.clone());
            }
        }

        for (i, transition) in view.transitions.iter().enumerate() {
            lines.push(format!("  {}) {}", i + 1, transition.label));
        }
        lines.join("\n")
    }

    pub fn format_checklist(entries: &[ChecklistEntry]) -> String {
        entries
            .iter()
            .map(|entry| {
                let marker = match entry.status {
                    StepStatus::Completed => "[x]",
                    StepStatus::Current => "[>]",
                    StepStatus::Pending => "[ ]",
                };
                format!("{} {}", marker, entry.title)
            })
            .join("\n")
    }

    /// One `name = value` line per variable, sorted by name.
    pub fn format_variables(variables: &AHashMap<String, String>) -> String {
        variables
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(name, value)| format!("{} = {}", name, value))
            .join("\n")
    }
}
