// Sanitization utilities
use ammonia;

/// Sanitize HTML content using ammonia library for comprehensive XSS protection
///
/// Upstream recipe summaries arrive as HTML fragments; they are cleaned
/// here before leaving the normalizer.
pub fn sanitize_html(text: &str) -> String {
    ammonia::clean(text)
}
