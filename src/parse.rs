// src/parse.rs
// Splits a model reply into its first fenced code block and the surrounding prose.

use once_cell::sync::Lazy;
use regex::Regex;

/// First fenced block: optional language tag (only when followed by a newline),
/// then a lazy match up to the nearest closing fence.
static CODE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:\w+\n)?(.*?)```").expect("valid code block regex"));

/// A model reply split into code and explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// Interior of the first fenced block, trimmed. `None` when the reply
    /// contains no fenced block; `Some("")` when the block is empty.
    pub code: Option<String>,
    /// Everything outside the extracted block. With no block, the raw reply
    /// unchanged.
    pub explanation: String,
}

/// Extract the first fenced code block from `raw` and treat the remainder as
/// the explanation.
///
/// Only the first block is extracted; later fenced blocks stay embedded in the
/// explanation verbatim. An opening fence with no closing fence anywhere is
/// not a block, so its backticks remain in the explanation.
pub fn parse_reply(raw: &str) -> ParsedReply {
    match CODE_BLOCK_RE.captures(raw) {
        Some(caps) => {
            let whole = caps.get(0).expect("group 0 always present");
            let code = caps.get(1).map(|m| m.as_str().trim().to_string());
            // Remove the entire matched span, fences and tag included.
            let mut explanation = String::with_capacity(raw.len() - whole.len());
            explanation.push_str(&raw[..whole.start()]);
            explanation.push_str(&raw[whole.end()..]);
            ParsedReply {
                code,
                explanation: explanation.trim().to_string(),
            }
        }
        None => ParsedReply {
            code: None,
            explanation: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_with_language_tag() {
        let reply = parse_reply("```python\nprint(1)\n```\nExplanation here.");
        assert_eq!(reply.code.as_deref(), Some("print(1)"));
        assert_eq!(reply.explanation, "Explanation here.");
    }

    #[test]
    fn block_without_language_tag() {
        let reply = parse_reply("Intro.\n```\nlet x = 1;\n```\nOutro.");
        assert_eq!(reply.code.as_deref(), Some("let x = 1;"));
        assert_eq!(reply.explanation, "Intro.\n\nOutro.");
    }

    #[test]
    fn no_block_returns_input_unchanged() {
        let text = "  The model declined to answer.  ";
        let reply = parse_reply(text);
        assert_eq!(reply.code, None);
        assert_eq!(reply.explanation, text);
    }

    #[test]
    fn no_residual_fence_markers_in_explanation() {
        let reply = parse_reply("Before ```rust\nfn main() {}\n``` after");
        assert_eq!(reply.code.as_deref(), Some("fn main() {}"));
        assert!(!reply.explanation.contains("```"));
        assert_eq!(reply.explanation, "Before  after");
    }

    #[test]
    fn only_first_block_is_extracted() {
        let reply = parse_reply("```a()```\ntext\n```b()```");
        assert_eq!(reply.code.as_deref(), Some("a()"));
        // The second block survives byte-for-byte.
        assert!(reply.explanation.contains("```b()```"));
    }

    #[test]
    fn nearest_closing_fence_wins() {
        // A greedy match would swallow up to the final fence.
        let reply = parse_reply("```first``` middle ```second```");
        assert_eq!(reply.code.as_deref(), Some("first"));
        assert!(reply.explanation.contains("```second```"));
    }

    #[test]
    fn empty_block_is_some_empty_not_none() {
        let reply = parse_reply("``` ```");
        assert_eq!(reply.code.as_deref(), Some(""));
        assert_eq!(reply.explanation, "");
    }

    #[test]
    fn unterminated_fence_is_no_match() {
        let text = "Here is code: ```python\nprint(1)";
        let reply = parse_reply(text);
        assert_eq!(reply.code, None);
        assert_eq!(reply.explanation, text);
    }

    #[test]
    fn tag_without_newline_stays_in_code() {
        // The tag is only recognized when a newline follows it.
        let reply = parse_reply("```python print(1)```");
        assert_eq!(reply.code.as_deref(), Some("python print(1)"));
    }

    #[test]
    fn multiline_block_spans_lines() {
        let reply = parse_reply("```python\ndef f():\n    return 1\n```\nDone.");
        assert_eq!(reply.code.as_deref(), Some("def f():\n    return 1"));
        assert_eq!(reply.explanation, "Done.");
    }
}
