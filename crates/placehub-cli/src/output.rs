//! Table, tree and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use placehub_entity::tree::{Forest, TreeNode};
use placehub_service::{MoveReport, UpdateOutcome};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a forest as an indented tree or as JSON
pub fn print_forest(forest: &Forest, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if forest.roots.is_empty() {
                println!("(empty)");
            } else {
                print!("{}", render_forest(forest));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(forest).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Render a forest with box-drawing connectors, one node per line
pub fn render_forest(forest: &Forest) -> String {
    let mut out = String::new();
    let count = forest.roots.len();
    for (i, node) in forest.roots.iter().enumerate() {
        render_node(node, "", i + 1 == count, &mut out);
    }
    out
}

fn render_node(node: &TreeNode, indent: &str, last: bool, out: &mut String) {
    let connector = if last { "└── " } else { "├── " };
    match node {
        TreeNode::Folder { name, .. } => {
            out.push_str(&format!("{indent}{connector}{name}/\n"));
        }
        TreeNode::Leaf { id, item } => {
            out.push_str(&format!(
                "{indent}{connector}{} ({}) [{id}]\n",
                item.display_name, item.path
            ));
        }
    }

    let child_indent = format!("{indent}{}", if last { "    " } else { "│   " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        render_node(child, &child_indent, i + 1 == children.len(), out);
    }
}

/// Print the per-item result of a batch of path updates
pub fn print_move_report(report: &MoveReport) {
    let destination = report.new_path.as_deref().unwrap_or("(unchanged)");
    for item_id in &report.applied {
        print_success(&format!("{} -> {}", item_id, destination));
    }
    if let Some(failure) = &report.failed {
        print_error(&format!("{}: {}", failure.item_id, failure.error));
    }
    for item_id in &report.not_attempted {
        print_warning(&format!("{} not attempted", item_id));
    }
    for node_id in &report.skipped {
        print_warning(&format!("{} is a folder, skipped", node_id));
    }
    if let Some(err) = &report.refresh_error {
        print_warning(&format!("Tree may be stale: {}", err));
    }
}

/// Print the result of a single write
pub fn print_outcome<T>(what: &str, outcome: &UpdateOutcome<T>) {
    match &outcome.error {
        None => print_success(what),
        Some(err) => print_error(&format!("{what} failed: {err}")),
    }
    if let Some(err) = &outcome.refresh_error {
        print_warning(&format!("Tree may be stale: {}", err));
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
