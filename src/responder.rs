use crate::config::ThinkingDelay;
use crate::knowledge::{
    contains_any, KnowledgeBase, HTP_KEYWORDS, MBTI_KEYWORDS, MULTI_IQ_KEYWORDS,
    SMARTPHONE_KEYWORDS,
};
use crate::logging;
use crate::message::{Attachment, BotResponse};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============ Classification ============

/// What a message asked for. Variants are listed in matching priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A specific MBTI code, e.g. "ISTJ".
    MbtiType(String),
    /// A specific intelligence type, e.g. "음악지능".
    MultiIqType(String),
    MultiIqOverview,
    Htp,
    Smartphone,
    MbtiOverview,
    /// Small-talk category key.
    SmallTalk(&'static str),
    Fallback,
}

impl Intent {
    pub fn tier(&self) -> &'static str {
        match self {
            Intent::MbtiType(_) => "mbti-exact",
            Intent::MultiIqType(_) => "multi-iq-exact",
            Intent::MultiIqOverview => "multi-iq-general",
            Intent::Htp => "htp",
            Intent::Smartphone => "smartphone",
            Intent::MbtiOverview => "mbti-general",
            Intent::SmallTalk(_) => "small-talk",
            Intent::Fallback => "fallback",
        }
    }
}

/// Decide which tier answers `input`. First match wins; all matching is
/// case-insensitive substring containment.
pub fn classify(kb: &KnowledgeBase, input: &str) -> Intent {
    // Specific lookups go before the general keyword tiers so "ISTJ" is not
    // swallowed by the generic personality keywords.
    let upper = input.to_uppercase();
    if let Some(profile) = kb
        .mbti_profiles()
        .iter()
        .find(|p| upper.contains(p.code.as_str()))
    {
        return Intent::MbtiType(profile.code.clone());
    }

    let lower = input.to_lowercase();
    if let Some(profile) = kb
        .multi_iq_profiles()
        .iter()
        .find(|p| lower.contains(p.name.as_str()))
    {
        return Intent::MultiIqType(profile.name.clone());
    }

    // Career/job words belong to multiple intelligences, so this runs before
    // the general MBTI tier.
    if contains_any(&lower, MULTI_IQ_KEYWORDS) {
        return Intent::MultiIqOverview;
    }
    if contains_any(&lower, HTP_KEYWORDS) {
        return Intent::Htp;
    }
    if contains_any(&lower, SMARTPHONE_KEYWORDS) {
        return Intent::Smartphone;
    }
    if contains_any(&lower, MBTI_KEYWORDS) {
        return Intent::MbtiOverview;
    }

    kb.intent_categories()
        .iter()
        .find(|category| contains_any(&lower, category.keywords))
        .map(|category| Intent::SmallTalk(category.key))
        .unwrap_or(Intent::Fallback)
}

fn pick<R: Rng + ?Sized, S: AsRef<str>>(rng: &mut R, candidates: &[S]) -> String {
    candidates
        .choose(rng)
        .map(|s| s.as_ref().to_string())
        .unwrap_or_default()
}

fn fallback<R: Rng + ?Sized>(kb: &KnowledgeBase, rng: &mut R) -> BotResponse {
    BotResponse::plain(pick(rng, kb.fallback_responses()))
}

/// Build the response for an already classified intent.
pub fn respond<R: Rng + ?Sized>(kb: &KnowledgeBase, intent: &Intent, rng: &mut R) -> BotResponse {
    match intent {
        Intent::MbtiType(code) => match kb.mbti_profile(code) {
            Some(profile) => BotResponse::with_attachment(
                format!("요청하신 **{}** 유형에 대한 정보입니다.", code),
                Attachment::Mbti(vec![profile.clone()]),
            ),
            None => fallback(kb, rng),
        },
        Intent::MultiIqType(name) => match kb.multi_iq_profile(name) {
            Some(profile) => BotResponse::with_attachment(
                format!("**{}**은 다음과 같은 특징을 가지고 있습니다.", name),
                Attachment::MultiIq(vec![profile.clone()]),
            ),
            None => fallback(kb, rng),
        },
        Intent::MultiIqOverview => BotResponse::with_attachment(
            kb.promo().multi_iq_overview.clone(),
            Attachment::MultiIq(kb.multi_iq_profiles().to_vec()),
        ),
        Intent::Htp => BotResponse::with_attachment(
            kb.promo().htp.clone(),
            Attachment::Htp(vec![kb.htp_guide().clone()]),
        ),
        Intent::Smartphone => BotResponse::with_attachment(
            kb.promo().smartphone.clone(),
            Attachment::Smartphone(vec![kb.smartphone_guide().clone()]),
        ),
        Intent::MbtiOverview => BotResponse::with_attachment(
            kb.promo().mbti_overview.clone(),
            Attachment::Mbti(kb.mbti_profiles().to_vec()),
        ),
        Intent::SmallTalk(key) => match kb.intent_category(key) {
            Some(category) => BotResponse::plain(pick(rng, category.responses.as_slice())),
            None => fallback(kb, rng),
        },
        Intent::Fallback => fallback(kb, rng),
    }
}

/// Classify `input` and build its response. Never fails: anything
/// unrecognized lands in the fallback tier.
pub fn classify_and_respond<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    input: &str,
    rng: &mut R,
) -> BotResponse {
    let intent = classify(kb, input);

    let detail = match &intent {
        Intent::MbtiType(code) => format!(" code={}", code),
        Intent::MultiIqType(name) => format!(" name={}", name),
        Intent::SmallTalk(key) => format!(" category={}", key),
        _ => String::new(),
    };
    logging::log_routing(None, &format!("tier={}{}", intent.tier(), detail));

    respond(kb, &intent, rng)
}

// ============ Responder Seam ============

/// Anything that can answer a user turn. The rule-based responder never
/// fails; other implementations (e.g. network-backed) may.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, input: &str) -> Result<BotResponse, Box<dyn Error + Send + Sync>>;
}

/// Keyword-matching responder with a simulated thinking delay.
pub struct RuleBasedResponder {
    kb: Arc<KnowledgeBase>,
    rng: Mutex<StdRng>,
    delay: ThinkingDelay,
}

impl RuleBasedResponder {
    pub fn new(kb: Arc<KnowledgeBase>, delay: ThinkingDelay) -> Self {
        Self {
            kb,
            rng: Mutex::new(StdRng::from_os_rng()),
            delay,
        }
    }

    /// Deterministic random choices, for tests and reproducible demos.
    pub fn with_seed(kb: Arc<KnowledgeBase>, delay: ThinkingDelay, seed: u64) -> Self {
        Self {
            kb,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            delay,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answer immediately, skipping the thinking delay.
    pub fn reply(&self, input: &str) -> BotResponse {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        classify_and_respond(&self.kb, input, &mut *rng)
    }

    /// Draw the next thinking delay from the configured range.
    pub fn thinking_time(&self) -> Duration {
        let (lo, hi) = self.delay.bounds();
        if lo == hi {
            return lo;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let millis = rng.random_range(lo.as_millis() as u64..=hi.as_millis() as u64);
        Duration::from_millis(millis)
    }
}

#[async_trait]
impl Responder for RuleBasedResponder {
    async fn respond(&self, input: &str) -> Result<BotResponse, Box<dyn Error + Send + Sync>> {
        let pause = self.thinking_time();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        Ok(self.reply(input))
    }
}
