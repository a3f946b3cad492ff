// README extraction.
// Decodes the base64 README payload and pulls the first real prose paragraph
// out of the Markdown, skipping titles, badges, and link lists.

use std::sync::OnceLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::{FolioError, Result};
use crate::github::GitHubClient;
use crate::worker::Reporter;

/// Paragraphs at or under this length are noise (a stray word, a shield
/// caption) and are skipped in favor of later candidates.
const MIN_PARAGRAPH_LEN: usize = 30;

/// Display cap; longer extracts are cut here and ellipsized.
const MAX_SUMMARY_LEN: usize = 200;

/// Cache key for a repository's extract.
pub fn readme_key(username: &str, repo: &str) -> String {
    format!("{}/{}", username, repo)
}

/// Fetch and extract a summary for one repository. Any failure — missing
/// README, bad payload, transport error — resolves to `None`; the caller
/// caches that outcome like any other.
pub async fn fetch_summary(
    client: &GitHubClient,
    reporter: &Reporter,
    username: &str,
    repo: &str,
) -> Option<String> {
    match client.get_readme(username, repo).await {
        Ok(readme) => match decode_content(&readme.content) {
            Ok(text) => extract_summary(&text),
            Err(e) => {
                reporter.warn(format!("README for {}/{} skipped: {}", username, repo, e));
                None
            }
        },
        // No README is the normal case for small repositories.
        Err(FolioError::NotFound(_)) => None,
        Err(e) => {
            reporter.warn(format!(
                "README fetch for {}/{} failed: {}",
                username, repo, e
            ));
            None
        }
    }
}

/// Decode the base64 `content` field. The provider wraps the text with
/// newlines, so whitespace is stripped first.
pub fn decode_content(payload: &str) -> Result<String> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Pull the first meaningful paragraph out of Markdown text.
///
/// Lines that are headings, blank, badges/images, bare links, bulleted
/// links, or a table-of-contents heading never start a paragraph. Once a
/// line survives, following lines are appended space-joined until a blank
/// line or heading. Candidates at or under 30 characters are discarded and
/// the scan continues.
pub fn extract_summary(markdown: &str) -> Option<String> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        if skip_line(line) {
            i += 1;
            continue;
        }

        let mut paragraph = line.to_string();
        while i + 1 < lines.len() {
            let next = lines[i + 1].trim();
            if next.is_empty() || next.starts_with('#') {
                break;
            }
            i += 1;
            paragraph.push(' ');
            paragraph.push_str(next);
        }

        if paragraph.len() > MIN_PARAGRAPH_LEN {
            return Some(cleanup_summary(&paragraph));
        }
        i += 1;
    }

    None
}

/// Lines that cannot start a paragraph.
fn skip_line(line: &str) -> bool {
    line.starts_with('#')
        || line.is_empty()
        || line.contains("![")
        || line.contains("https://")
        || line.contains("- [")
        || line.contains("## Table of Contents")
}

/// Strip emphasis and link markup, then hard-truncate with an ellipsis.
fn cleanup_summary(paragraph: &str) -> String {
    let text = bold_re().replace_all(paragraph, "$1");
    let text = italic_re().replace_all(&text, "$1");
    let text = link_re().replace_all(&text, "$1");
    let text = text.trim();

    if text.len() > MAX_SUMMARY_LEN {
        let mut end = MAX_SUMMARY_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", text[..end].trim_end())
    } else {
        text.to_string()
    }
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap())
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_paragraph_past_title_and_badge() {
        let readme = "# Title\n\n![badge](url)\n\nThis tool does X and Y for Z.\nIt also supports W.";
        assert_eq!(
            extract_summary(readme),
            Some("This tool does X and Y for Z. It also supports W.".to_string())
        );
    }

    #[test]
    fn test_short_paragraphs_are_skipped() {
        let readme = "# Title\n\nTiny intro.\n\nA longer paragraph that easily clears the noise threshold.";
        assert_eq!(
            extract_summary(readme),
            Some("A longer paragraph that easily clears the noise threshold.".to_string())
        );
    }

    #[test]
    fn test_no_usable_paragraph_yields_none() {
        let readme = "# Title\n\n![shield](x)\n\nshort\n\n- [docs](https://example.com)\n";
        assert_eq!(extract_summary(readme), None);
    }

    #[test]
    fn test_link_lines_and_toc_are_skipped() {
        let readme = "See https://example.com for details\n\n## Table of Contents\n\n- [Install](#install)\n\nAn actual description sentence long enough to keep.";
        assert_eq!(
            extract_summary(readme),
            Some("An actual description sentence long enough to keep.".to_string())
        );
    }

    #[test]
    fn test_emphasis_and_links_are_stripped() {
        let readme = "A **bold** and *subtle* tool, documented in [the guide](docs/guide.md).";
        assert_eq!(
            extract_summary(readme),
            Some("A bold and subtle tool, documented in the guide.".to_string())
        );
    }

    #[test]
    fn test_long_extract_is_ellipsized() {
        let long_line = "word ".repeat(60);
        let summary = extract_summary(&long_line).unwrap();

        assert!(summary.ends_with("..."));
        assert!(summary.len() <= MAX_SUMMARY_LEN + 3);
    }

    #[test]
    fn test_decode_handles_wrapped_base64() {
        // "hello world" split across lines the way the API wraps content
        let decoded = decode_content("aGVsbG8g\nd29ybGQ=\n").unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_content("!!not base64!!").is_err());
    }
}
