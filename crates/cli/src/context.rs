//! Application context - Dependency Injection & Wiring
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  AppContext - built once per invocation                         │
//! │    ├── QuillConfig (file or defaults)                           │
//! │    ├── InMemoryContentRepository  (posts, blogs, content)       │
//! │    ├── InMemoryCategoryRepository (categories)                  │
//! │    ├── StaticDimensionRepository  (from config)                 │
//! │    └── StaticUserContext          (from config)                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use quill_adapter::{
    ContentFixture, InMemoryCategoryRepository, InMemoryContentRepository,
    StaticDimensionRepository, StaticUserContext,
};
use quill_usecase::{
    ArchiveListing, CategoryOptionSource, IdentityEncoding, PaginationSettings, PostDetail,
    PostMutations,
};
use shared::{OptionValueFormat, QuillConfig};
use tracing::{debug, info};

pub struct AppContext {
    pub config: QuillConfig,
    pub content: InMemoryContentRepository,
    pub categories: InMemoryCategoryRepository,
    pub dimensions: StaticDimensionRepository,
    pub user: StaticUserContext,
    /// Fixture file written back after mutations
    content_file: Option<PathBuf>,
}

impl AppContext {
    /// Build the context from an optional config file and content path
    pub fn load(config_path: Option<&Path>, content_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => QuillConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => QuillConfig::default(),
        };

        let mut ctx = Self::from_config(config);

        if let Some(path) = content_path {
            let fixture = ContentFixture::from_path(path)
                .with_context(|| format!("reading content {}", path.display()))?;
            fixture.import(
                &mut ctx.content,
                &mut ctx.categories,
                &ctx.config.default_dimension,
            )?;
            if path.is_file() {
                ctx.content_file = Some(path.to_path_buf());
            }
        }

        Ok(ctx)
    }

    /// An empty store wired from configuration
    pub fn from_config(config: QuillConfig) -> Self {
        Self {
            content: InMemoryContentRepository::new(&config.default_dimension),
            categories: InMemoryCategoryRepository::new(),
            dimensions: StaticDimensionRepository::from_config(&config),
            user: StaticUserContext::new(&config.actor),
            content_file: None,
            config,
        }
    }

    pub fn archive_listing(&self) -> ArchiveListing<'_> {
        ArchiveListing::new(&self.content, &self.content, &self.dimensions, &self.user)
    }

    pub fn post_detail(&self) -> PostDetail<'_> {
        PostDetail::new(&self.content)
    }

    pub fn category_source(&self) -> CategoryOptionSource<'_> {
        CategoryOptionSource::new(&self.categories, self.identity_encoding())
            .with_identifier(&self.config.category_source.identifier)
    }

    /// Run a mutation against the store
    ///
    /// Posts and persistence are two handles onto the same tree.
    pub fn with_mutations<T>(
        &mut self,
        f: impl FnOnce(&mut PostMutations<'_>) -> T,
    ) -> T {
        let mut persistence = self.content.clone();
        let mut mutations = PostMutations::new(&mut self.content, &mut persistence);
        f(&mut mutations)
    }

    pub fn identity_encoding(&self) -> IdentityEncoding {
        let source = &self.config.category_source;
        match source.format {
            OptionValueFormat::Json => IdentityEncoding::Json {
                identity_key: source.identity_key.clone(),
                type_key: source.type_key.clone(),
                type_tag: source.type_tag.clone(),
            },
            OptionValueFormat::Plain => IdentityEncoding::Plain,
        }
    }

    pub fn pagination_settings(&self) -> PaginationSettings {
        PaginationSettings {
            items_per_page: self.config.pagination.items_per_page,
            maximum_number_of_links: self.config.pagination.maximum_number_of_links,
        }
    }

    /// Write the store back to the content file it was read from
    pub fn save(&self) -> anyhow::Result<()> {
        match &self.content_file {
            Some(path) => {
                ContentFixture::export(&self.content, &self.categories)?.to_file(path)?;
                info!(path = %path.display(), "content written back");
            }
            None => debug!("no content file, changes stay in memory"),
        }
        Ok(())
    }
}
