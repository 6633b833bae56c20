use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::context::DiaryContext;
use crate::handlers::require_unlocked;

pub fn handle_export(file: &str, config_dir: &Path) -> Result<()> {
    let ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let json = ctx.export_json()?;
    fs::write(file, json).context("Failed to write backup file")?;

    println!("✓ Exported {} entries to {}", ctx.entries().len(), file);
    Ok(())
}

pub fn handle_import(file: &str, config_dir: &Path) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let raw = fs::read_to_string(file).context("Failed to read backup file")?;

    match ctx.import_json(&raw) {
        Ok(outcome) => {
            println!("✓ Imported {} entries from {}", outcome.entries, file);
            if outcome.password_replaced {
                println!("⚠ The backup's password replaced the current one.");
            }
        }
        Err(e) => println!("⚠ Import failed: {e}"),
    }
    Ok(())
}

pub fn handle_doc(file: Option<String>, config_dir: &Path) -> Result<()> {
    let ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let doc = ctx.render_document(Local::now().date_naive());
    let path = file.unwrap_or_else(|| doc.filename.clone());
    fs::write(&path, &doc.body).context("Failed to write document")?;

    println!("✓ Wrote {} ({} entries)", path, ctx.entries().len());
    Ok(())
}
