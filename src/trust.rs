//! Trust policy: a domain allow-list deciding auto-approval.
//!
//! The policy is a plain value passed explicitly into every call site,
//! so ingestion and the two reclassification operations can run under
//! different lists without drifting apart through hidden globals.

/// Default allow-list: company blogs only.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "openai.com",
    "anthropic.com",
    "blog.google",
    "deepmind.google",
];

#[derive(Debug, Clone)]
pub struct TrustPolicy {
    domains: Vec<String>,
}

impl TrustPolicy {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// True iff the feed URL contains any allow-listed domain as a
    /// substring. Pure and deterministic.
    pub fn is_trusted(&self, url: &str) -> bool {
        self.domains.iter().any(|d| url.contains(d.as_str()))
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl Default for TrustPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_trusts_company_blogs() {
        let policy = TrustPolicy::default();
        assert!(policy.is_trusted("https://openai.com/news/rss.xml"));
        assert!(policy.is_trusted("https://www.anthropic.com/index.xml"));
        assert!(!policy.is_trusted("https://www.theverge.com/rss/index.xml"));
    }

    #[test]
    fn repeated_calls_agree() {
        let policy = TrustPolicy::new(vec!["venturebeat.com".to_string()]);
        let url = "https://venturebeat.com/category/ai/feed/";
        assert_eq!(policy.is_trusted(url), policy.is_trusted(url));
        assert!(policy.is_trusted(url));
    }

    #[test]
    fn empty_list_trusts_nothing() {
        let policy = TrustPolicy::new(Vec::new());
        assert!(!policy.is_trusted("https://openai.com/news/rss.xml"));
    }
}
