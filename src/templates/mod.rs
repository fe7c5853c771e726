//! Embedded page templates using the Tera template engine
//!
//! All page templates are compiled into the binary, so a deployment is a
//! single executable plus the content directory.

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with the embedded page set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all page templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("cv.html", include_str!("site/cv.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("projects.html", include_str!("site/projects.html")),
            ("project.html", include_str!("site/project.html")),
            ("not_found.html", include_str!("site/not_found.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn base_context() -> Context {
        let mut context = Context::new();
        context.insert("site", &SiteConfig::default());
        context
    }

    #[test]
    fn test_all_templates_compile() {
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_home_renders_site_title() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render("home.html", &base_context()).unwrap();
        assert!(html.contains("Portfolio"));
    }

    #[test]
    fn test_post_content_is_not_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert(
            "post",
            &crate::content::Post {
                slug: "s".to_string(),
                title: "T".to_string(),
                date: "2024-01-01".to_string(),
                content: "<h1>T</h1>".to_string(),
                keywords: vec![],
            },
        );
        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<h1>T</h1>"));
    }

    #[test]
    fn test_query_is_escaped_in_blog_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("posts", &Vec::<crate::content::PostSummary>::new());
        context.insert("query", "<script>alert(1)</script>");
        let html = renderer.render("blog.html", &context).unwrap();
        assert!(!html.contains("<script>alert"));
    }
}
