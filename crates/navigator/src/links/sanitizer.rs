use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::registry::PathRegistry;
use crate::session::UserProfile;

use super::catalog::ProductCatalog;
use super::enhance::enhance_link_text;
use super::resolve::PathResolver;

static LINK_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").ok());

/// One `[text](target)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkToken {
    pub text: String,
    pub target_path: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Reader needs explicit call-to-action wording on every internal link.
    pub assisted: bool,
}

impl SanitizeOptions {
    pub fn for_profile(profile: Option<&UserProfile>) -> Self {
        Self {
            assisted: profile.is_some_and(UserProfile::needs_assistance),
        }
    }
}

/// Rewrites links in generated text so that every internal target is a
/// registry path, falling back to the site root.
#[derive(Debug, Clone)]
pub struct LinkSanitizer {
    resolver: PathResolver,
    fallback_path: String,
}

impl LinkSanitizer {
    pub fn new(
        registry: Arc<PathRegistry>,
        catalog: ProductCatalog,
        products_route: &str,
        fallback_path: &str,
    ) -> Self {
        Self {
            resolver: PathResolver::new(registry, catalog, products_route),
            fallback_path: fallback_path.to_string(),
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// All links in `text`, in order, as written.
    pub fn scan(text: &str) -> Vec<LinkToken> {
        let Some(re) = LINK_RE.as_ref() else {
            return Vec::new();
        };
        re.captures_iter(text)
            .map(|caps| LinkToken {
                text: caps[1].to_string(),
                target_path: caps[2].trim().to_string(),
            })
            .collect()
    }

    /// Rewrite every link in `text`. Never fails: anything unresolvable
    /// points at the fallback path.
    pub fn sanitize(&self, text: &str, options: SanitizeOptions) -> String {
        let Some(re) = LINK_RE.as_ref() else {
            return text.to_string();
        };
        re.replace_all(text, |caps: &Captures| {
            let token = LinkToken {
                text: caps[1].to_string(),
                target_path: caps[2].trim().to_string(),
            };
            if is_external(&token.target_path) {
                return caps[0].to_string();
            }
            let path = self.internal_target(&token.target_path);
            let text = enhance_link_text(&token.text, &path, options.assisted);
            format!("[{text}]({path})")
        })
        .into_owned()
    }

    /// Registry path for an internal link target, query and fragment removed.
    pub fn internal_target(&self, target: &str) -> String {
        if has_scheme(target) {
            tracing::debug!(link = target, "non-web scheme replaced with fallback");
            return self.fallback_path.clone();
        }

        let stripped = target
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = if stripped.starts_with('/') {
            stripped.to_string()
        } else {
            format!("/{stripped}")
        };

        if self.resolver.registry().find_by_path(&path).is_some() {
            return path;
        }
        match self.resolver.resolve(&path) {
            Some(resolved) => resolved,
            None => {
                tracing::debug!(path = %path, "unresolved link, using fallback");
                self.fallback_path.clone()
            }
        }
    }
}

fn is_external(target: &str) -> bool {
    let lowered = target.to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

/// `scheme:` prefix per RFC 3986 (letter, then letters, digits, `+`, `-`, `.`).
fn has_scheme(target: &str) -> bool {
    let Some((scheme, _)) = target.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
