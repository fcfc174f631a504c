//! Icon URL derivation for pasted addresses
//!
//! Tiles show a favicon served by a third-party service. The service URL is
//! built from the bare hostname of the bookmarked address.

use url::Url;

/// Placeholder replaced by the hostname in the service template
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// Google S2 favicon service
pub const DEFAULT_SERVICE_TEMPLATE: &str =
    "https://s2.googleusercontent.com/s2/favicons?domain={domain}&sz=64";

/// Generic globe icon used when no hostname can be derived
pub const DEFAULT_ICON_URL: &str =
    "https://s2.googleusercontent.com/s2/favicons?domain=default&sz=64";

/// Builds favicon URLs from addresses
#[derive(Debug, Clone, PartialEq)]
pub struct IconService {
    template: String,
    default_icon_url: String,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_TEMPLATE, DEFAULT_ICON_URL)
    }
}

impl IconService {
    pub fn new(template: impl Into<String>, default_icon_url: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            default_icon_url: default_icon_url.into(),
        }
    }

    pub fn default_icon_url(&self) -> &str {
        &self.default_icon_url
    }

    /// Favicon URL for `address`, if a hostname can be derived
    pub fn try_icon_url(&self, address: &str) -> Option<String> {
        extract_domain(address).map(|domain| self.template.replace(DOMAIN_PLACEHOLDER, &domain))
    }

    /// Favicon URL for `address`, falling back to the default icon
    pub fn icon_url(&self, address: &str) -> String {
        self.try_icon_url(address)
            .unwrap_or_else(|| self.default_icon_url.clone())
    }
}

/// Bare hostname of `address`, without scheme, `www.`, path or query
///
/// A scheme is assumed when the input does not start with `http`.
pub fn extract_domain(address: &str) -> Option<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return None;
    }

    let standardized = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&standardized).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Display title for `address`: first domain label, capitalized
///
/// `https://www.google.com/search` becomes `Google`.
pub fn derive_title(address: &str) -> Option<String> {
    let domain = extract_domain(address)?;
    let label = domain.split('.').next().unwrap_or(&domain);
    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
