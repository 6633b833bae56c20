use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;

use crate::cli::input;
use crate::context::DiaryContext;
use crate::handlers::require_unlocked;

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

pub fn handle_add(
    content: Option<String>,
    date: Option<String>,
    title: Option<String>,
    config_dir: &Path,
) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let date = match date {
        Some(raw) => parse_date(&raw)?,
        None => Local::now().date_naive(),
    };
    let content = match content {
        Some(c) => c,
        None => input::prompt_content()?,
    };
    if content.trim().is_empty() {
        anyhow::bail!("Entry content cannot be empty");
    }

    let entry = ctx.add_entry(date, title.unwrap_or_default(), content)?;
    println!("✓ Entry added for {} (id: {})", entry.date, entry.id);
    Ok(())
}

pub fn handle_list(config_dir: &Path) -> Result<()> {
    let ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    if ctx.entries().is_empty() {
        println!("No entries yet. Run 'diary add' to write your first one.");
        return Ok(());
    }

    println!("\nEntries:");
    for entry in ctx.entries() {
        println!("  • {}  {}", entry.date, entry.display_title());
        println!("    id: {}", entry.id);
    }
    Ok(())
}

pub fn handle_show(date: &str, config_dir: &Path) -> Result<()> {
    let ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let date = parse_date(date)?;
    match ctx.entry_by_date(date) {
        Some(entry) => {
            println!("\n{}", entry.date.format("%A, %B %-d, %Y"));
            println!("{}\n", entry.display_title());
            println!("{}", entry.content);
            println!("\nCreated: {}", entry.created_at.format("%Y-%m-%d %H:%M:%S"));
            println!("Updated: {}", entry.updated_at.format("%Y-%m-%d %H:%M:%S"));
        }
        None => println!("⚠ No entry found for {date}"),
    }
    Ok(())
}

pub fn handle_edit(
    id: &str,
    title: Option<String>,
    content: Option<String>,
    config_dir: &Path,
) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    let Some(existing) = ctx.entries().iter().find(|e| e.id == id).cloned() else {
        println!("⚠ Entry '{id}' not found");
        return Ok(());
    };

    let title = title.unwrap_or(existing.title);
    let content = match content {
        Some(c) => c,
        None => input::prompt_content_with_initial(&existing.content)?,
    };
    if content.trim().is_empty() {
        anyhow::bail!("Entry content cannot be empty");
    }

    ctx.update_entry(id, title, content)?;
    println!("✓ Entry updated.");
    Ok(())
}

pub fn handle_rm(id: &str, config_dir: &Path) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;
    require_unlocked(&ctx)?;

    if ctx.delete_entry(id)? {
        println!("✓ Entry removed.");
    } else {
        println!("⚠ Entry '{id}' not found (nothing removed)");
    }
    Ok(())
}
