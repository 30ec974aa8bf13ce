//! CLI Command Implementations

use std::fmt::Write as _;
use std::path::Path;

use log::info;

use crate::cake::{Category, LayerCake};
use crate::error::Result;
use crate::layer::{Layer, UNUSED};
use crate::store;

/// Load a cake and report whether it is valid.
pub fn validate(path: &Path) -> Result<()> {
    info!("Validating cake: {}", path.display());
    let cake = store::load(path)?;
    println!(
        "OK: {} ({} active layer(s))",
        path.display(),
        cake.active_categories().count()
    );
    Ok(())
}

/// Print every layer of a cake, or just the one for `category`.
pub fn show(path: &Path, category: Option<Category>) -> Result<()> {
    let cake = store::load(path)?;
    match category {
        Some(category) => println!("{}", render_entry(category, cake.layer(category))),
        None => print!("{}", render_cake(&cake)),
    }
    Ok(())
}

/// Print the unused sentinel.
pub fn unused() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&UNUSED)?);
    Ok(())
}

/// Write an all-unused cake to `output`, or stdout.
pub fn template(output: Option<&Path>) -> Result<()> {
    let cake = LayerCake::unused();
    match output {
        Some(path) => {
            store::save(&cake, path)?;
            println!("Template written: {}", path.display());
        }
        None => println!("{}", cake.to_json_string()?),
    }
    Ok(())
}

fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unset",
    }
}

fn render_layer(layer: &Layer) -> String {
    if layer.is_unused() {
        return "unused".to_string();
    }
    format!(
        "pronoun={} presentation={} bigender={} preference={}",
        if layer.uses_pronoun { "yes" } else { "no" },
        flag(layer.presentation),
        flag(layer.bigender_option),
        layer.preference
    )
}

fn render_entry(category: Category, layer: &Layer) -> String {
    format!("{:<10} {}", category, render_layer(layer))
}

/// Human-readable listing, one line per category then the aggregate flags
pub fn render_cake(cake: &LayerCake) -> String {
    let mut out = String::new();
    for (category, layer) in cake.layers() {
        let _ = writeln!(out, "{}", render_entry(category, layer));
    }
    let _ = writeln!(out, "usesOtherPronouns: {}", flag(cake.uses_other_pronouns));
    let _ = writeln!(out, "usesAnyPronouns: {}", flag(cake.uses_any_pronouns));
    out
}
