use anyhow::Result;
use std::path::Path;

use crate::cli::input;
use crate::context::DiaryContext;

pub fn handle_init(config_dir: &Path) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;

    if ctx.has_password()? {
        println!("⚠ A password is already set. Use 'diary unlock'.");
        return Ok(());
    }

    let password = input::prompt_new_password()?;
    ctx.set_password(&password)?;

    println!("✓ Diary created and unlocked.");
    println!("  Entries live in the session store only — export a backup before clearing it.");
    Ok(())
}

pub fn handle_unlock(config_dir: &Path) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;

    if !ctx.has_password()? {
        println!("⚠ No password set yet. Run 'diary init' first.");
        return Ok(());
    }
    if ctx.is_unlocked() {
        println!("Diary is already unlocked.");
        return Ok(());
    }

    let password = input::prompt_password()?;
    if ctx.unlock(&password)? {
        println!("✓ Diary unlocked ({} entries).", ctx.entries().len());
    } else {
        println!("⚠ Incorrect password");
    }
    Ok(())
}

pub fn handle_lock(config_dir: &Path) -> Result<()> {
    let mut ctx = DiaryContext::open(config_dir)?;
    ctx.lock()?;
    println!("✓ Diary locked.");
    Ok(())
}

pub fn handle_status(config_dir: &Path) -> Result<()> {
    let ctx = DiaryContext::open(config_dir)?;

    if ctx.is_unlocked() {
        println!("🔓 Diary is unlocked ({} entries)", ctx.entries().len());
    } else if ctx.has_password()? {
        println!("🔒 Diary is locked");
    } else {
        println!("🔒 No diary yet — run 'diary init'");
    }
    Ok(())
}
