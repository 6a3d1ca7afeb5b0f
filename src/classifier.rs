//! Topic relevance classification. Pure string matching, no I/O.

/// Keyword list for topic filtering. Matching is substring-based and
/// case-insensitive; the 2-letter "ai" entry deliberately overmatches
/// (it hits inside words like "maintain"), which is an accepted
/// false-positive source inherited from the curation policy, not a bug.
pub const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "gpt",
    "llm",
    "chatbot",
    "neural",
    "openai",
    "anthropic",
    "google ai",
    "deepmind",
    "midjourney",
    "dall-e",
    "generative",
    "automation",
    "claude",
    "gemini",
    "copilot",
    "language model",
    "transformer",
];

/// Feed-path markers that declare an entire feed topic-dedicated.
const TOPIC_FEED_MARKERS: &[&str] = &["ai", "artificial-intelligence"];

/// True when the feed URL itself signals a topic-dedicated feed, in
/// which case items pass without any text inspection.
pub fn is_topic_feed(feed_url: &str) -> bool {
    let url = feed_url.to_lowercase();
    TOPIC_FEED_MARKERS.iter().any(|m| url.contains(m))
}

/// Decide whether an item is on-topic. Items from topic-dedicated
/// feeds are unconditionally relevant; otherwise title and snippet are
/// concatenated, lowercased and scanned for any keyword.
pub fn is_relevant(title: &str, snippet: Option<&str>, feed_url: &str) -> bool {
    if is_topic_feed(feed_url) {
        return true;
    }
    let text = format!("{} {}", title, snippet.unwrap_or("")).to_lowercase();
    AI_KEYWORDS.iter().any(|kw| text.contains(kw))
}
