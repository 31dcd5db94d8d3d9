//! CLI command implementations.

use crate::manifest::{self, Manifest};
use crate::Listing;
use bom_core::{Category, Part, PartView};
use bom_graph::{BomGraph, GraphConfig};
use colored::Colorize;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Where the graph for a command comes from.
pub struct Source<'a> {
    pub manifest: &'a Path,
    pub config: Option<&'a Path>,
}

impl Source<'_> {
    fn graph(&self) -> Result<BomGraph> {
        let config = manifest::load_config(self.config, self.manifest)?;
        let manifest = Manifest::load(self.manifest)?;
        Ok(manifest.build(config)?)
    }
}

/// Write a default configuration into a directory.
pub fn init(path: &Path) -> Result<()> {
    let config_dir = path.join(manifest::CONFIG_DIR);
    let config_path = config_dir.join(manifest::CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&config_dir)?;
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&GraphConfig::default())?,
    )?;

    println!("{} Initialized BOM config in {}", "✓".green(), path.display());
    println!("  Describe parts in {}", "bom.json".cyan());

    Ok(())
}

/// Show part and relation counts.
pub fn status(source: &Source) -> Result<()> {
    let graph = source.graph()?;
    let stats = graph.stats();

    println!("{}", "BOM Status".cyan().bold());
    println!("  Parts:                {}", stats.part_count);
    println!("  Relations:            {}", stats.relation_count);
    println!("  Top-level assemblies: {}", stats.top_level_assemblies);
    println!("  Sub-assemblies:       {}", stats.sub_assemblies);
    println!("  Components:           {}", stats.components);
    println!("  Orphans:              {}", stats.orphans);

    Ok(())
}

/// List parts.
pub fn list(source: &Source, listing: Listing) -> Result<()> {
    let graph = source.graph()?;
    let parts = match listing {
        Listing::All => graph.list_all_parts()?,
        Listing::Assemblies => graph.list_assemblies()?,
        Listing::Category(category) => graph.list(Some(category))?,
    };

    if parts.is_empty() {
        println!("No parts found");
        return Ok(());
    }

    for part in parts {
        print_part(part);
    }
    Ok(())
}

/// Show every assembly containing a part.
pub fn contains(source: &Source, part_id: &str) -> Result<()> {
    let graph = source.graph()?;
    let assemblies = graph.containing_assemblies_of(part_id)?;

    if assemblies.is_empty() {
        println!("{} is not contained in any assembly", part_id.cyan());
        return Ok(());
    }

    println!("{} is contained in {} assemblies:\n", part_id.cyan(), assemblies.len());
    for view in &assemblies {
        print_view(view);
    }
    Ok(())
}

/// Show every part below an assembly.
pub fn descendants(source: &Source, assembly_id: &str) -> Result<()> {
    let graph = source.graph()?;
    let parts = graph.descendants_of(assembly_id)?;

    println!("{} has {} parts below it:\n", assembly_id.cyan(), parts.len());
    for view in &parts {
        print_view(view);
    }
    Ok(())
}

/// Show the direct children of an assembly.
pub fn children(source: &Source, assembly_id: &str) -> Result<()> {
    let graph = source.graph()?;
    let parts = graph.direct_children_of(assembly_id)?;

    println!("{} has {} direct children:\n", assembly_id.cyan(), parts.len());
    for part in parts {
        print_part(part);
    }
    Ok(())
}

/// Export the graph to JSON.
pub fn export(source: &Source, output: &Path) -> Result<()> {
    let graph = source.graph()?;
    let parts: Vec<&Part> = graph.parts().collect();

    let export = serde_json::json!({
        "version": "1.0",
        "stats": graph.stats(),
        "parts": parts,
        "relations": graph.export_relations(),
    });

    fs::write(output, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

/// Verify the classification index.
pub fn check(source: &Source) -> Result<()> {
    let graph = source.graph()?;
    graph.check_index()?;

    println!(
        "{} Classification index consistent ({} parts)",
        "✓".green(),
        graph.len()
    );
    Ok(())
}

fn category_label(category: Category) -> colored::ColoredString {
    let label = category.as_str();
    match category {
        Category::TopLevelAssembly => label.magenta(),
        Category::SubAssembly => label.blue(),
        Category::Component => label.yellow(),
        Category::Orphan => label.dimmed(),
    }
}

fn print_part(part: &Part) {
    print_line(&part.id, &part.name, &part.description, part.category);
}

fn print_view(view: &PartView) {
    print_line(&view.id, &view.name, &view.description, view.category);
}

fn print_line(id: &str, name: &str, description: &str, category: Category) {
    println!("  {} {} {}", category_label(category), id.cyan(), name);
    if !description.is_empty() {
        println!("    {}", description.dimmed());
    }
}
