//! quill delete command

use clap::Args;
use dialoguer::Confirm;
use quill_domain::NodeId;
use quill_usecase::RequestMethod;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Post node id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Request method the deletion is performed with
    #[arg(long, default_value = "POST")]
    pub method: RequestMethod,
}

impl DeleteCommand {
    pub fn run(&self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let id = NodeId::new(&self.id);

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete post {} and all of its content?", id))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }
        }

        let redirect = ctx.with_mutations(|m| m.delete(&id, self.method))?;
        ctx.save()?;

        println!("✓ Post {} deleted (→ {})", id, redirect.action);
        Ok(())
    }
}
