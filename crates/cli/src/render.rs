//! Terminal rendering of use case results

use console::style;
use quill_domain::Post;
use quill_usecase::{ArchiveViewModel, CategoryOption, PaginationView, PostDetailView};

fn post_line(post: &Post) -> String {
    let mut line = format!(
        "{}  {}  {}",
        style(post.published_at().format("%d.%m.%Y %H:%M")).dim(),
        style(post.title().unwrap_or("(untitled)")).bold(),
        style(format!("[{}]", post.id())).cyan(),
    );
    if !post.author().is_empty() {
        line.push_str(&format!("  by {}", post.author()));
    }
    if let Some(category) = post.category() {
        line.push_str(&format!("  #{}", category.name()));
    }
    if let Some(blog) = post.parent() {
        line.push_str(&format!("  in {}", blog.title()));
    }
    line
}

fn menu<'a>(label: &str, entries: impl Iterator<Item = &'a String>) -> Option<String> {
    let entries: Vec<&str> = entries.map(String::as_str).collect();
    (!entries.is_empty()).then(|| format!("{} {}", style(label).yellow(), entries.join(", ")))
}

pub fn archive(view: &ArchiveViewModel, page: &[Post], pagination: &PaginationView) -> String {
    let mut lines = vec![format!(
        "{} ({} archived posts, workspace {})",
        style("Archive").bold().underlined(),
        view.post_count,
        view.personal_workspace
    )];

    if page.is_empty() {
        lines.push("  No archived posts.".to_string());
    }
    lines.extend(page.iter().map(|post| format!("  {}", post_line(post))));

    if pagination.number_of_pages > 1 {
        lines.push(format!(
            "  Page {} of {}",
            pagination.current_page, pagination.number_of_pages
        ));
    }

    lines.extend(
        [
            menu("Workspaces:", view.workspace_filter_menu.keys()),
            menu("Authors:", view.author_filter_menu.iter()),
            menu("Categories:", view.category_filter_menu.keys()),
            menu("Blogs:", view.blog_filter_menu.keys()),
        ]
        .into_iter()
        .flatten(),
    );

    let active = view
        .dimension_label
        .as_deref()
        .or(view.default_language.as_deref())
        .unwrap_or("-");
    let others: Vec<String> = view
        .dimensions
        .iter()
        .map(|d| format!("{} ({})", d.label(), d.key()))
        .collect();
    lines.push(format!(
        "{} {}{}",
        style("Language:").yellow(),
        active,
        if others.is_empty() {
            String::new()
        } else {
            format!("  switch to: {}", others.join(", "))
        }
    ));

    lines.join("\n")
}

pub fn detail(view: &PostDetailView) -> String {
    let mut lines = vec![post_line(&view.post)];
    if let Some(teaser) = &view.teaser {
        lines.push(format!("  {}", style(teaser).italic()));
    }
    if let Some(image) = &view.image {
        lines.push(format!("  image: {}", image));
    }
    lines.extend(
        view.properties
            .iter()
            .map(|(name, value)| format!("  {}: {}", style(name).dim(), value)),
    );
    lines.join("\n")
}

pub fn options(options: &[CategoryOption]) -> String {
    if options.is_empty() {
        return "No categories.".to_string();
    }
    options
        .iter()
        .map(|o| format!("{}  {}", style(&o.label).bold(), o.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_plain_listing() {
        console::set_colors_enabled(false);
        let rendered = options(&[CategoryOption {
            label: "News".to_string(),
            value: "c-1".to_string(),
        }]);
        assert_eq!(rendered, "News  c-1");
        assert_eq!(options(&[]), "No categories.");
    }
}
