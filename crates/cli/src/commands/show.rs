//! quill show command

use clap::Args;
use quill_domain::NodeId;

use crate::context::AppContext;
use crate::render;

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Post node id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let view = ctx.post_detail().show(&NodeId::new(&self.id))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            println!("{}", render::detail(&view));
        }
        Ok(())
    }
}
