//! quill list command

use anyhow::{anyhow, Context as _};
use clap::Args;
use quill_domain::{CategoryRepository, DimensionRepository, NodeId, Workspace};
use quill_usecase::{ArchiveQuery, ArchiveViewModel, Pagination, PaginationView};
use serde::Serialize;

use crate::context::AppContext;
use crate::render;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only posts of this workspace
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Only posts by this author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Only posts in this category (by name)
    #[arg(long)]
    pub category: Option<String>,

    /// Only posts of this blog (by node id)
    #[arg(short, long)]
    pub blog: Option<String>,

    /// Language dimension key
    #[arg(short, long)]
    pub dimension: Option<String>,

    /// Label shown for the requested language
    #[arg(long, requires = "dimension")]
    pub dimension_label: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    #[serde(flatten)]
    archive: &'a ArchiveViewModel,
    pagination: &'a PaginationView,
}

impl ListCommand {
    pub fn query(&self, ctx: &AppContext) -> anyhow::Result<ArchiveQuery> {
        let category = match &self.category {
            Some(name) => Some(
                ctx.categories
                    .find_by_name(name)?
                    .ok_or_else(|| anyhow!("Unknown category: {}", name))?,
            ),
            None => None,
        };

        let dimension = match &self.dimension {
            Some(key) => Some(
                ctx.dimensions
                    .find_dimension(key)?
                    .ok_or_else(|| anyhow!("Unknown language dimension: {}", key))?,
            ),
            None => None,
        };

        Ok(ArchiveQuery {
            workspace: self.workspace.as_deref().map(Workspace::new),
            author: self.author.clone(),
            category,
            blog: self.blog.as_deref().map(NodeId::new),
            dimension,
            dimension_label: self.dimension_label.clone(),
        })
    }

    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let query = self.query(ctx)?;
        let mut view = ctx
            .archive_listing()
            .list(&query)
            .context("building archive listing")?;

        let pagination = Pagination::new(ctx.pagination_settings(), view.post_count, self.page);
        let page = pagination.slice(&view.posts).to_vec();
        let pagination = pagination.view();

        if self.json {
            view.posts = page;
            let output = ListOutput {
                archive: &view,
                pagination: &pagination,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", render::archive(&view, &page, &pagination));
        }
        Ok(())
    }
}
