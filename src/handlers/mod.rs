pub mod entry;
pub mod session;
pub mod transfer;

use anyhow::Result;

use crate::context::DiaryContext;
use crate::infrastructure::SessionStore;

pub(crate) fn require_unlocked<S: SessionStore>(ctx: &DiaryContext<S>) -> Result<()> {
    if !ctx.is_unlocked() {
        anyhow::bail!("Diary is locked. Run 'diary unlock' first.");
    }
    Ok(())
}
