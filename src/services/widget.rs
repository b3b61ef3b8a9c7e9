//! Widget configuration and the embeddable review-card markup.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::review::Review;
use crate::repository::WidgetReader;
use crate::services::{ServiceError, ServiceResult};

/// Widget used when no store is configured or no widget row exists.
pub const DEFAULT_WIDGET_ID: &str = "demo-widget";

const DEFAULT_SHARE_URL: &str = "https://instantproof.app";

/// Shareable widget configuration returned by `/api/widget`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub id: String,
    pub snippet: String,
    pub share_url: String,
}

/// Resolve the widget id and build the copy-pasteable embed snippet.
///
/// The base URL prefers the request host, then the configured public base
/// URL; with neither, the snippet uses a relative path and the share URL
/// falls back to the public site.
pub fn get_widget_config<R>(
    host: &str,
    public_base_url: Option<&str>,
    repo: Option<&R>,
) -> WidgetConfig
where
    R: WidgetReader,
{
    let base_host = if host.is_empty() {
        public_base_url.unwrap_or_default()
    } else {
        host
    };
    let domain = if base_host.starts_with("http") {
        base_host.to_string()
    } else if !base_host.is_empty() {
        format!("https://{base_host}")
    } else {
        String::new()
    };
    let share_url = if domain.is_empty() {
        DEFAULT_SHARE_URL.to_string()
    } else {
        domain.clone()
    };

    let id = repo
        .and_then(|repo| match repo.first_widget_id() {
            Ok(id) => id,
            Err(e) => {
                log::error!("Failed to fetch widget config, using fallback: {e}");
                None
            }
        })
        .unwrap_or_else(|| DEFAULT_WIDGET_ID.to_string());

    let snippet = format!(r#"<script src="{domain}/api/widget-embed.js?id={id}" defer></script>"#);

    WidgetConfig {
        id,
        snippet,
        share_url,
    }
}

/// Render the widget card markup and wrap it in a self-mounting script.
///
/// The returned string is a complete JavaScript body: it inserts the card
/// before the including `<script>` tag, falling back to `document.body`.
pub fn build_embed_script(
    tera: &Tera,
    title: &str,
    reviews: &[Review],
    trust_score: i32,
) -> ServiceResult<String> {
    let top_reviews: Vec<&Review> = reviews.iter().take(3).collect();

    let mut context = Context::new();
    context.insert("title", title);
    context.insert("trust_score", &trust_score);
    context.insert("reviews", &top_reviews);

    let markup = tera.render("widget/embed.html", &context).map_err(|e| {
        log::error!("Failed to render widget embed template: {e}");
        ServiceError::Internal
    })?;

    let markup_literal = serde_json::to_string(&markup).map_err(|e| {
        log::error!("Failed to encode widget markup: {e}");
        ServiceError::Internal
    })?;

    Ok(format!(
        r#"(function() {{
    try {{
        const mount = document.createElement('div');
        mount.innerHTML = {markup_literal};
        const node = mount.firstElementChild;
        const current = document.currentScript;
        if (current && current.parentNode) {{
            current.parentNode.insertBefore(node, current);
        }} else {{
            document.body.appendChild(node);
        }}
    }} catch (e) {{
        console.error('InstantProof widget failed to mount', e);
    }}
}})();
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{Review, bundled_reviews};
    use crate::repository::test::TestRepository;

    fn sample_reviews() -> Vec<Review> {
        bundled_reviews().into_iter().map(Review::from).collect()
    }

    fn embed_tera() -> Tera {
        Tera::new("templates/**/*.html").expect("templates should parse")
    }

    #[test]
    fn widget_config_prefers_the_request_host() {
        let repo = TestRepository::default().with_widget("w-123");
        let config = get_widget_config("proof.example.com", Some("https://fallback"), Some(&repo));

        assert_eq!(config.id, "w-123");
        assert_eq!(config.share_url, "https://proof.example.com");
        assert_eq!(
            config.snippet,
            r#"<script src="https://proof.example.com/api/widget-embed.js?id=w-123" defer></script>"#
        );
    }

    #[test]
    fn widget_config_falls_back_to_public_base_url() {
        let config =
            get_widget_config::<TestRepository>("", Some("https://instantproof.app"), None);
        assert_eq!(config.id, DEFAULT_WIDGET_ID);
        assert_eq!(config.share_url, "https://instantproof.app");
    }

    #[test]
    fn widget_config_without_any_host_uses_relative_snippet() {
        let config = get_widget_config::<TestRepository>("", None, None);
        assert_eq!(config.share_url, DEFAULT_SHARE_URL);
        assert_eq!(
            config.snippet,
            r#"<script src="/api/widget-embed.js?id=demo-widget" defer></script>"#
        );
    }

    #[test]
    fn embed_script_contains_markup_and_mount_logic() {
        let script =
            build_embed_script(&embed_tera(), "Verified Reviews", &sample_reviews(), 98).unwrap();

        assert!(script.starts_with("(function()"));
        assert!(script.contains("document.currentScript"));
        assert!(script.contains("Verified Reviews"));
        assert!(script.contains("98"));
        // Only the top three reviews are rendered.
        assert!(script.contains("Sarah M."));
        assert!(script.contains("@techguru"));
        assert!(!script.contains("growth_hacker"));
    }
}
