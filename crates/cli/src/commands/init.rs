//! quill init command

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Args;
use shared::QuillConfig;

pub const CONFIG_FILE: &str = "quill.json";
pub const CONTENT_FILE: &str = "content.yaml";

const SAMPLE_CONTENT: &str = r#"categories:
  - id: 5b8c0c1e-4f0a-4d55-9a51-0d2f6b1b7a10
    name: News
  - name: Releases

blogs:
  - id: blog-main
    title: Main Blog
  - id: blog-drafts
    title: Drafts
    workspace: user-admin

posts:
  - id: post-welcome
    blog: blog-main
    archived: true
    publishedAt: 2024-01-15T09:00:00Z
    author: admin
    category: News
    properties:
      title: Welcome to Quill
    content:
      - id: post-welcome-text
        type: Quill.Content:Text
        properties:
          text: "<p>Quill keeps <b>archived</b> posts out of the way until you need them again.</p>"
      - id: post-welcome-image
        type: Quill.Content:Image
        properties:
          image: images/welcome.png

  - id: post-release
    blog: blog-main
    archived: true
    publishedAt: 2024-02-01T12:30:00Z
    author: editor
    category: Releases
    properties:
      title: Release 1.0

  - id: post-draft
    blog: blog-drafts
    workspace: user-admin
    archived: true
    publishedAt: 2024-03-10T08:00:00Z
    author: admin
    properties:
      title: Unfinished thoughts

  - id: post-current
    blog: blog-main
    publishedAt: 2024-04-01T10:00:00Z
    author: admin
    properties:
      title: Still on the front page
"#;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Only write the config, no sample content
    #[arg(long)]
    pub minimal: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing Quill archive in {}", self.directory.display());
        std::fs::create_dir_all(&self.directory)?;

        let config = QuillConfig::default();
        self.write(
            &self.directory.join(CONFIG_FILE),
            &serde_json::to_string_pretty(&config)?,
        )?;

        if !self.minimal {
            self.write(&self.directory.join(CONTENT_FILE), SAMPLE_CONTENT)?;
        }

        println!("✓ Quill archive initialized");
        println!(
            "  try: quill --config {} --content {} list",
            self.directory.join(CONFIG_FILE).display(),
            self.directory.join(CONTENT_FILE).display()
        );
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        if path.exists() && !self.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
