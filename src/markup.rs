// Inline link handling for bot text.
// Bot replies may embed `[label](url)`; everything else is plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("inline link pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Link { label: String, url: String },
}

/// Split `text` into plain and link segments, in order.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in INLINE_LINK.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        if whole.start() > last {
            out.push(Segment::Text {
                text: text[last..whole.start()].to_string(),
            });
        }
        out.push(Segment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = whole.end();
    }

    if last < text.len() {
        out.push(Segment::Text {
            text: text[last..].to_string(),
        });
    }

    out
}

/// Render links as their labels.
pub fn plain_text(text: &str) -> String {
    INLINE_LINK.replace_all(text, "$1").into_owned()
}

/// First link target in `text`, if any.
pub fn first_link(text: &str) -> Option<String> {
    INLINE_LINK.captures(text).map(|caps| caps[2].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_links() {
        assert_eq!(
            segments("그냥 텍스트\n두 줄"),
            vec![Segment::Text { text: "그냥 텍스트\n두 줄".to_string() }]
        );
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_link_in_the_middle() {
        let parts = segments("눌러서 **[검사하러 가기](https://example.org/a)** 해보세요");
        assert_eq!(
            parts,
            vec![
                Segment::Text { text: "눌러서 **".to_string() },
                Segment::Link {
                    label: "검사하러 가기".to_string(),
                    url: "https://example.org/a".to_string(),
                },
                Segment::Text { text: "** 해보세요".to_string() },
            ]
        );
    }

    #[test]
    fn test_two_links_back_to_back() {
        let parts = segments("[a](u1)[b](u2)");
        assert_eq!(parts.len(), 2);
        assert!(matches!(&parts[1], Segment::Link { label, .. } if label == "b"));
    }

    #[test]
    fn test_plain_text_and_first_link() {
        let text = "추천: [MBTI](https://example.org/mbti) 검사";
        assert_eq!(plain_text(text), "추천: MBTI 검사");
        assert_eq!(first_link(text).as_deref(), Some("https://example.org/mbti"));
        assert_eq!(first_link("no links"), None);
    }

    #[test]
    fn test_every_promo_text_has_one_link() {
        let kb = crate::knowledge::KnowledgeBase::builtin();
        let promo = kb.promo();
        for text in [&promo.multi_iq_overview, &promo.htp, &promo.smartphone, &promo.mbti_overview] {
            let links = segments(text)
                .into_iter()
                .filter(|s| matches!(s, Segment::Link { .. }))
                .count();
            assert_eq!(links, 1, "{}", text);
        }
    }
}
