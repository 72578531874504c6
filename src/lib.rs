pub mod config;
pub mod knowledge;
pub mod logging;
pub mod markup;
pub mod message;
pub mod responder;
pub mod session;

pub use config::GuideConfig;
pub use knowledge::{KnowledgeBase, TestId, TestInfo};
pub use message::{Attachment, BotResponse, ChatMessage, Role};
pub use responder::{classify, classify_and_respond, Intent, Responder, RuleBasedResponder};
pub use session::{ChatSession, SendOutcome};

use std::sync::Arc;

// ============ Guide Initialization ============

/// Set up logging and build the responder described by `config`.
///
/// Logging problems are reported and otherwise ignored; the guide works
/// with console output only.
pub fn init_guide(config: &GuideConfig) -> Arc<RuleBasedResponder> {
    if let Some(dir) = &config.logging.dir {
        if let Err(e) = logging::init_logging(dir) {
            eprintln!("Failed to initialize logging: {}", e);
        }

        match logging::cleanup_old_logs(dir, config.logging.retention_days) {
            Ok(0) => {}
            Ok(n) => logging::log_config(&format!("Removed {} expired log files", n)),
            Err(e) => logging::log_error(None, &format!("Log cleanup failed: {}", e)),
        }
    }

    let kb = if config.test_urls.is_empty() {
        KnowledgeBase::shared()
    } else {
        logging::log_config(&format!("Applying {} catalog URL overrides", config.test_urls.len()));
        for (id, url) in &config.test_urls {
            match TestId::from_str(id) {
                Some(test) => logging::log_config(&format!("Catalog URL for {}: {}", test.as_str(), url)),
                None => logging::log_error(None, &format!("Ignoring URL override for unknown test '{}'", id)),
            }
        }
        Arc::new(KnowledgeBase::with_test_urls(&config.test_urls))
    };

    logging::log_conversation(None, "Guide initialized");

    Arc::new(RuleBasedResponder::new(kb, config.thinking_delay))
}

/// Start a chat session backed by the rule-based responder.
pub fn new_session(config: &GuideConfig, viewport_width: u32) -> ChatSession {
    let responder = init_guide(config);
    let catalog = responder.knowledge().catalog().to_vec();
    ChatSession::new(responder, catalog, &config.ui, viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThinkingDelay;

    #[test]
    fn test_init_guide_applies_url_overrides() {
        let mut config = GuideConfig::default();
        config
            .test_urls
            .insert("smartphone".to_string(), "https://example.org/phone".to_string());
        config
            .test_urls
            .insert("tarot".to_string(), "https://example.org/tarot".to_string());

        let responder = init_guide(&config);

        assert_eq!(
            responder.knowledge().test(TestId::Smartphone).url,
            "https://example.org/phone"
        );
        let reply = responder.reply("스마트폰 중독인가");
        assert!(reply.text.contains("(https://example.org/phone)"));
    }

    #[test]
    fn test_init_guide_writes_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let mut config = GuideConfig::default();
        config.logging.dir = Some(logs.clone());

        init_guide(&config);

        assert!(logs.is_dir());
    }

    #[tokio::test]
    async fn test_new_session_round_trip() {
        let mut config = GuideConfig::default();
        config.thinking_delay = ThinkingDelay::NONE;

        let mut session = new_session(&config, 1440);
        assert!(session.is_sidebar_open());
        assert_eq!(session.quick_links().len(), 4);

        let outcome = session.send_message("그림 검사 해보고 싶어").await;

        assert_eq!(outcome, SendOutcome::Replied);
        let reply = &session.messages()[1];
        assert_eq!(reply.attachment.as_ref().map(|a| a.kind()), Some("htp"));
    }
}
