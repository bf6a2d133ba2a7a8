//! quill categories command

use clap::Args;

use crate::context::AppContext;
use crate::render;

#[derive(Debug, Args)]
pub struct CategoriesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CategoriesCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let source = ctx.category_source();
        let options = source.get_data()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&options)?);
        } else {
            println!("{} ({})", render::options(&options), source.identifier());
        }
        Ok(())
    }
}
