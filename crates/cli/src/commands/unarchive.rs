//! quill unarchive command

use clap::Args;
use quill_domain::NodeId;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct UnarchiveCommand {
    /// Post node id
    pub id: String,
}

impl UnarchiveCommand {
    pub fn run(&self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let id = NodeId::new(&self.id);
        let redirect = ctx.with_mutations(|m| m.unarchive(&id))?;
        ctx.save()?;

        println!("✓ Post {} moved out of the archive (→ {})", id, redirect.action);
        Ok(())
    }
}
