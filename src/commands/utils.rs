use crate::output::read_tree;
use crate::utils::config::COST_TOLERANCE;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a company tree JSON file
pub fn validate_tree_file(file_path: PathBuf) -> Result<()> {
    println!("Validating company tree: {}", file_path.display());

    let tree = read_tree(&file_path)?;

    let violations = tree.cost_violations(COST_TOLERANCE);
    if !violations.is_empty() {
        anyhow::bail!(
            "Cost is below the sum of its children for: {}",
            violations.join(", ")
        );
    }

    println!("✓ Valid company tree JSON");
    println!("  Root: {} ({})", tree.id, tree.name);
    println!("  Total Cost: {:.2}", tree.cost);
    println!("  Companies: {}", tree.node_count());
    println!("  Direct Children: {}", tree.children.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Company Cost Tree v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Builds a company hierarchy and rolls travel expenses up to every ancestor.");
}
