use std::sync::OnceLock;

use regex::Regex;

/// Whole-line image syntax `![alt](url)`.
pub struct Image;

impl Image {
    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"^!\[(.*)\]\((.*)\)$").expect("Invalid image regex"))
    }

    /// Returns `(alt, url)`, both trimmed, if the whole line is an image.
    ///
    /// Both captures are greedy, so they span everything up to the last
    /// `](` and the final `)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let caps = Self::regex().captures(line)?;
        let alt = caps.get(1)?.as_str().trim();
        let url = caps.get(2)?.as_str().trim();
        Some((alt, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_image() {
        assert_eq!(
            Image::parse("![Alt text](http://example.com/image.png)"),
            Some(("Alt text", "http://example.com/image.png"))
        );
    }

    #[test]
    fn trims_alt_and_url() {
        assert_eq!(
            Image::parse("![  Alt  ](  http://url.com/img.png  )"),
            Some(("Alt", "http://url.com/img.png"))
        );
    }

    #[test]
    fn empty_parts_are_allowed() {
        assert_eq!(Image::parse("![]()"), Some(("", "")));
    }

    #[test]
    fn greedy_captures_span_to_the_end() {
        assert_eq!(
            Image::parse("![a](b) ![c](d)"),
            Some(("a](b) ![c", "d"))
        );
    }

    #[test]
    fn unbalanced_or_partial_lines_do_not_match() {
        assert_eq!(Image::parse("![alt(url)"), None);
        assert_eq!(Image::parse("![alt](url"), None);
        assert_eq!(Image::parse("see ![alt](url)"), None);
        assert_eq!(Image::parse("![alt](url) trailing"), None);
    }
}
