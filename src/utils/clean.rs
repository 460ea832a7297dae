//! Markup stripping for fetched pages.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    // Patterns are literals below; the fallback never matches anything.
    Regex::new(pattern).unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
}

static IMG_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"<img[^>]*>"));
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)<script[^>]*>.*?</script>"));
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)<style[^>]*>.*?</style>"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"<meta[^>]*>"));
static READ_MORE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)read\s*more\s*</a>"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"</?[^>]+(>|$)"));

/// Strip every tag and trim the result.
#[must_use]
pub fn remove_html(content: &str) -> String {
    TAG_RE.replace_all(content, "").trim().to_string()
}

/// Drop images, scripts, styles, metadata and "read more" links, then strip
/// the remaining markup.
#[must_use]
pub fn clean_content(content: &str) -> String {
    let content = IMG_RE.replace_all(content, "");
    let content = SCRIPT_RE.replace_all(&content, "");
    let content = STYLE_RE.replace_all(&content, "");
    let content = META_RE.replace_all(&content, "");
    let content = READ_MORE_RE.replace_all(&content, "");
    remove_html(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_html_strips_tags() {
        assert_eq!(remove_html("<p>Hello <strong>World</strong>!</p>"), "Hello World!");
        assert_eq!(remove_html("<div><span></span></div>"), "");
        assert_eq!(remove_html("Plain text without tags."), "Plain text without tags.");
    }

    #[test]
    fn clean_content_drops_non_content_elements() {
        let input = r#"
        <html>
          <head>
            <meta charset="UTF-8">
            <style>body { color: red; }</style>
          </head>
          <body>
            <script>alert("Hi!");</script>
            <img src="image.jpg" alt="Example">
            <p>Hello World!</p>
          </body>
        </html>"#;
        assert_eq!(clean_content(input), "Hello World!");
    }

    #[test]
    fn clean_content_drops_read_more_links() {
        let input = r#"
        <p>This is an article.</p>
        <a href="/read-more">Read More</a>"#;
        assert_eq!(clean_content(input), "This is an article.");
    }

    #[test]
    fn clean_content_handles_nested_tags() {
        let input = r#"
        <div>
          <p style="color: blue;">Hello <span>World</span></p>
          <script>console.log("test");</script>
          <style>div { background: white; }</style>
        </div>"#;
        assert_eq!(clean_content(input), "Hello World");
    }

    #[test]
    fn tag_only_input_cleans_to_empty() {
        assert_eq!(clean_content("<img src='image.jpg'><script></script>"), "");
    }

    #[test]
    fn unterminated_tag_is_stripped_to_end() {
        assert_eq!(remove_html("Text <a href='x'"), "Text");
    }
}
