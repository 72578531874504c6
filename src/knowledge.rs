// Static knowledge base for the guide bot.
// Everything here is built once and only read afterwards.

use crate::message::{GuideItem, HtpGuide, MbtiProfile, MultiIqProfile, SmartphoneGuide};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ============ Test Catalog ============

/// The four recommended tests, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestId {
    Mbti,
    MultiIq,
    Htp,
    Smartphone,
}

impl TestId {
    pub const ALL: [TestId; 4] = [TestId::Mbti, TestId::MultiIq, TestId::Htp, TestId::Smartphone];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestId::Mbti => "mbti",
            TestId::MultiIq => "multi-iq",
            TestId::Htp => "htp",
            TestId::Smartphone => "smartphone",
        }
    }

    pub fn from_str(s: &str) -> Option<TestId> {
        match s.to_lowercase().as_str() {
            "mbti" => Some(TestId::Mbti),
            "multi-iq" | "multi_iq" | "multiiq" => Some(TestId::MultiIq),
            "htp" => Some(TestId::Htp),
            "smartphone" => Some(TestId::Smartphone),
            _ => None,
        }
    }

    /// Position in the catalog.
    pub fn index(&self) -> usize {
        match self {
            TestId::Mbti => 0,
            TestId::MultiIq => 1,
            TestId::Htp => 2,
            TestId::Smartphone => 3,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TestInfo {
    pub id: TestId,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String, // "Brain" | "Lightbulb" | "Palette" | "Smartphone"
}

impl TestInfo {
    /// Markdown-style link to this test, as embedded in bot text.
    pub fn link(&self, label: &str) -> String {
        format!("[{}]({})", label, self.url)
    }
}

fn default_catalog() -> Vec<TestInfo> {
    vec![
        TestInfo {
            id: TestId::Mbti,
            name: "MBTI 성격유형 검사".to_string(),
            description: "16가지 성격 유형으로 알아보는 나의 성향".to_string(),
            url: "https://www.16personalities.com/ko".to_string(),
            icon: "Brain".to_string(),
        },
        TestInfo {
            id: TestId::MultiIq,
            name: "다중지능 검사".to_string(),
            description: "8가지 지능으로 찾는 나의 강점과 적성".to_string(),
            url: "https://www.career.go.kr/cnet/front/examen/inspectionMain.do".to_string(),
            icon: "Lightbulb".to_string(),
        },
        TestInfo {
            id: TestId::Htp,
            name: "HTP 그림 심리 검사".to_string(),
            description: "집, 나무, 사람 그림으로 들여다보는 내면".to_string(),
            url: "https://www.htp-test.kr".to_string(),
            icon: "Palette".to_string(),
        },
        TestInfo {
            id: TestId::Smartphone,
            name: "스마트폰 과의존 척도".to_string(),
            description: "나의 디지털 사용 습관 점검하기".to_string(),
            url: "https://www.iapc.or.kr".to_string(),
            icon: "Smartphone".to_string(),
        },
    ]
}

// ============ MBTI Table ============

/// 16 types in table order. Raw entries are shaped `(alias) emoji: description`.
pub const MBTI_TABLE: [(&str, &str); 16] = [
    ("ISTJ", "(청렴결백한 논리주의자) 📋: 사실을 중시하고 책임감이 강하며, 맡은 일을 체계적이고 꾸준하게 해내는 현실주의자입니다."),
    ("ISFJ", "(용감한 수호자) 🛡️: 주변 사람을 세심하게 챙기고 헌신적이며, 조용히 따뜻한 도움을 건네는 보호자입니다."),
    ("INFJ", "(선의의 옹호자) 🔮: 깊은 통찰력과 이상을 지녔으며, 사람들의 성장을 돕는 데서 의미를 찾습니다."),
    ("INTJ", "(용의주도한 전략가) ♟️: 독립적이고 분석적이며, 장기적인 계획을 세워 목표를 달성하는 전략가입니다."),
    ("ISTP", "(만능 재주꾼) 🔧: 논리적이고 실용적이며, 도구와 기계를 다루는 데 능숙한 문제 해결사입니다."),
    ("ISFP", "(호기심 많은 예술가) 🎨: 온화하고 감수성이 풍부하며, 지금 이 순간의 아름다움을 즐기는 예술가입니다."),
    ("INFP", "(열정적인 중재자) 🌱: 자신의 가치를 소중히 여기고, 공감 능력이 뛰어난 이상주의자입니다."),
    ("INTP", "(논리적인 사색가) 🧠: 지적 호기심이 많고, 원리와 구조를 파고드는 것을 즐기는 사색가입니다."),
    ("ESTP", "(모험을 즐기는 사업가) 🏄: 에너지가 넘치고 현실 감각이 뛰어나며, 즉흥적인 도전을 즐깁니다."),
    ("ESFP", "(자유로운 영혼의 연예인) 🎉: 사교적이고 낙천적이며, 주변을 즐겁게 만드는 분위기 메이커입니다."),
    ("ENFP", "(재기발랄한 활동가) 🦋: 열정적이고 상상력이 풍부하며, 새로운 가능성을 찾아 사람들과 어울립니다."),
    ("ENTP", "(뜨거운 논쟁을 즐기는 변론가) 💡: 재치 있고 도전적이며, 새로운 아이디어로 기존의 틀을 깨는 발명가입니다."),
    ("ESTJ", "(엄격한 관리자) 📊: 체계와 규칙을 중시하며, 사람과 일을 효율적으로 조직하는 관리자입니다."),
    ("ESFJ", "(사교적인 외교관) 🤝: 친절하고 협조적이며, 공동체의 조화를 위해 노력하는 사람입니다."),
    ("ENFJ", "(정의로운 사회운동가) 🌟: 카리스마와 공감 능력을 갖춘 리더로, 다른 사람의 잠재력을 이끌어냅니다."),
    ("ENTJ", "(대담한 통솔자) 👑: 결단력 있고 목표 지향적이며, 큰 그림을 그리고 조직을 이끄는 지도자입니다."),
];

static MBTI_RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((.*?)\)\s*(.*?):\s*(.*)").expect("MBTI record pattern is valid")
});

/// Parse a raw MBTI entry. Entries that don't match the `(alias) emoji: text`
/// shape keep the whole string as the description.
pub fn parse_mbti_record(code: &str, raw: &str) -> MbtiProfile {
    match MBTI_RECORD.captures(raw) {
        Some(caps) => MbtiProfile {
            code: code.to_string(),
            alias: caps[1].to_string(),
            emoji: caps[2].to_string(),
            description: caps[3].to_string(),
        },
        None => MbtiProfile {
            code: code.to_string(),
            alias: String::new(),
            emoji: String::new(),
            description: raw.to_string(),
        },
    }
}

// ============ Multiple Intelligences ============

/// (name, description, recommended jobs), in table order.
pub const MULTI_IQ_TABLE: [(&str, &str, &str); 8] = [
    ("언어지능", "말과 글을 효과적으로 사용하고, 생각을 언어로 풀어내는 능력이 뛰어납니다.", "작가, 기자, 아나운서, 변호사, 교사"),
    ("논리수학지능", "숫자와 규칙을 다루고, 논리적으로 추론하며 문제를 해결하는 능력이 뛰어납니다.", "과학자, 엔지니어, 회계사, 프로그래머, 수학자"),
    ("공간지능", "공간과 형태를 정확하게 인식하고, 머릿속에 이미지를 그려내는 능력이 뛰어납니다.", "건축가, 디자이너, 화가, 조종사, 사진작가"),
    ("신체운동지능", "몸을 자유롭게 움직이고, 손으로 섬세하게 무언가를 만드는 능력이 뛰어납니다.", "운동선수, 무용가, 배우, 외과의사, 요리사"),
    ("음악지능", "소리와 리듬, 음정에 민감하고 음악으로 감정을 표현하는 능력이 뛰어납니다.", "작곡가, 가수, 연주자, 음향 엔지니어, 음악치료사"),
    ("대인관계지능", "다른 사람의 감정과 의도를 잘 이해하고, 원만하게 소통하는 능력이 뛰어납니다.", "상담사, 교사, 영업 관리자, 정치인, 간호사"),
    ("자기이해지능", "자신의 감정과 강점을 깊이 이해하고, 스스로를 조절하는 능력이 뛰어납니다.", "심리학자, 철학자, 작가, 종교인, 연구원"),
    ("자연친화지능", "자연과 생물을 관찰하고 분류하며, 환경의 변화를 민감하게 알아차리는 능력이 뛰어납니다.", "생물학자, 수의사, 환경운동가, 조경사, 농업 연구원"),
];

// ============ Keyword Tables ============

pub const MULTI_IQ_KEYWORDS: &[&str] = &["지능", "재능", "강점", "적성", "iq", "아이큐", "진로", "직업", "다중"];

pub const HTP_KEYWORDS: &[&str] = &["그림", "심리", "나무", "집", "미술", "htp", "에이치티피"];

pub const SMARTPHONE_KEYWORDS: &[&str] = &[
    "스마트폰", "핸드폰", "중독", "과의존", "디지털", "폰", "유튜브", "인스타", "쇼츠", "릴스",
];

pub const MBTI_KEYWORDS: &[&str] = &["mbti", "성격", "엠비티아이", "유형"];

/// True when `haystack` contains any keyword. Callers normalize case first.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

// ============ Small Talk ============

#[derive(Debug, Clone)]
pub struct IntentCategory {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: Vec<String>,
}

fn intent_categories(catalog: &[TestInfo]) -> Vec<IntentCategory> {
    let mbti = &catalog[TestId::Mbti.index()];
    let multi_iq = &catalog[TestId::MultiIq.index()];

    vec![
        IntentCategory {
            key: "greeting",
            keywords: &["안녕", "반가", "하이", "hello", "ㅎㅇ", "시작", "처음"],
            responses: vec![
                "안녕하세요! 저는 여러분에게 필요한 심리 검사를 안내해 드리는 **심리 상담 가이드 봇**입니다. 🌲".to_string(),
                "반갑습니다. 숲 상담소에 오신 것을 환영해요. \n저는 여러분의 마음 상태에 맞는 심리 검사를 추천해 드리는 **상담 가이드**입니다.".to_string(),
                "어서오세요! 저는 **심리 상담 가이드 봇**입니다. \n성격, 진로, 스트레스 등 궁금한 점을 말씀해 주시면 적절한 검사를 찾아드릴게요.".to_string(),
            ],
        },
        IntentCategory {
            key: "identity",
            keywords: &["너는", "누구", "이름", "뭐하는", "정체", "넌", "능력", "기능", "할 수", "도움"],
            responses: vec![
                "저는 **심리 상담 가이드 봇**입니다. 🌲 \n여러분의 고민을 듣고 MBTI, 다중지능, HTP, 스마트폰 과의존 등 적절한 심리 검사 사이트를 안내해 드리는 역할을 하고 있어요.".to_string(),
                "저는 숲 상담소의 가이드입니다. 심리 검사가 필요하거나 자신의 마음을 알아보고 싶을 때 저에게 물어봐 주세요.".to_string(),
            ],
        },
        IntentCategory {
            key: "gratitude",
            keywords: &["고마", "감사", "땡큐", "thx", "굿", "좋아"],
            responses: vec![
                "도움이 되어서 정말 기뻐요! 언제든 또 찾아주세요. 🌿".to_string(),
                "당신의 마음이 숲처럼 편안해지길 바랍니다.".to_string(),
                "별말씀을요! 당신의 하루가 조금 더 행복해지길 응원할게요.".to_string(),
            ],
        },
        IntentCategory {
            key: "weather",
            keywords: &["날씨", "비", "눈", "더워", "추워", "맑음", "화창"],
            responses: vec![
                "날씨에 따라 기분도 달라지곤 하죠. 마음의 날씨는 어떠신가요? ☀️".to_string(),
                "비가 오면 차분해지고, 맑으면 설레기도 하죠. 오늘은 어떤 기분인지 들려주세요.".to_string(),
            ],
        },
        IntentCategory {
            key: "food",
            keywords: &["밥", "배고", "점심", "저녁", "메뉴", "맛있", "먹었"],
            responses: vec![
                "맛있는 음식을 먹으면 기분이 좋아지죠! 오늘은 당신이 제일 좋아하는 음식을 드셨으면 좋겠어요.".to_string(),
                "저는 로봇이라 밥을 먹진 못하지만, 당신이 든든하게 챙겨 먹었으면 좋겠어요. 🍚".to_string(),
            ],
        },
        IntentCategory {
            key: "bored",
            keywords: &["심심", "지루", "놀아", "할거", "뭐하지"],
            responses: vec![
                format!(
                    "심심할 땐 나에 대해 알아보는 것만큼 재미있는 게 없죠! \n**{}** 한번 해보시는 건 어때요?",
                    mbti.link(&mbti.name)
                ),
                format!(
                    "지루한 시간, 숨겨진 재능을 찾아보는 건 어떨까요? **{}**를 추천드려요!",
                    multi_iq.link(&multi_iq.name)
                ),
            ],
        },
        IntentCategory {
            key: "tired",
            keywords: &["피곤", "지쳐", "힘드", "자고", "졸려", "밤"],
            responses: vec![
                "오늘 하루도 정말 고생 많으셨어요. 푹 쉬면서 재충전하는 시간이 꼭 필요해요. 🌙".to_string(),
                "잠시 눈을 감고 심호흡을 해보세요. 당신은 충분히 휴식할 자격이 있어요.".to_string(),
            ],
        },
    ]
}

pub const FALLBACK_RESPONSES: [&str; 4] = [
    "음, 제가 모든 말을 이해하진 못하지만, 저는 **심리 상담 가이드 봇**으로서 여러분에게 맞는 검사를 찾아드리고 있어요. 😊 \n혹시 심리 검사를 찾고 계신다면 \"성격\"이나 \"적성\" 같은 단어로 물어봐 주세요.",
    "그렇군요. 일상적인 대화도 좋지만, 저는 **심리 상담 가이드**라 여러분의 마음을 돌보는 데에 더 집중하고 싶어요! ✨ \n성격, 진로, 스트레스 등에 대해 궁금한 점이 있으신가요?",
    "제가 아직 배우는 중이라 정확히 답하기 어렵네요. 😅 \n하지만 저는 **심리 검사 안내 봇**이니, **MBTI**나 **그림 검사** 등을 추천해 드릴 수 있어요.",
    "당신의 이야기에 귀 기울이고 있어요. \n저는 **상담 가이드 봇**입니다. 혹시 마음이 복잡하시다면 적절한 심리 검사를 받아보는 건 어떨까요?",
];

// ============ Guide Records ============

fn item(emoji: &str, name: &str, description: &str) -> GuideItem {
    GuideItem {
        emoji: emoji.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn htp_guide() -> HtpGuide {
    HtpGuide {
        title: "HTP 그림 심리 검사 가이드".to_string(),
        intro: "집(House), 나무(Tree), 사람(Person)을 차례로 그리며 그림에 담긴 마음을 살펴봅니다. 잘 그리는 것보다 솔직하게 그리는 것이 중요해요.".to_string(),
        items: vec![
            item("🏠", "집", "가정과 가족 관계, 내가 느끼는 안정감을 보여줍니다. 문과 창문은 바깥 세상과 소통하려는 태도를 나타내요."),
            item("🌳", "나무", "무의식적인 자아상과 성장 에너지를 보여줍니다. 줄기와 가지는 내면의 힘과 주변과의 관계를 나타내요."),
            item("🧑", "사람", "지금의 자기 모습과 대인관계 태도를 보여줍니다. 표정과 자세에는 현재의 감정이 드러나요."),
        ],
    }
}

fn smartphone_guide() -> SmartphoneGuide {
    SmartphoneGuide {
        title: "스마트폰 과의존 자가진단 가이드".to_string(),
        intro: "스마트폰 과의존은 사용 조절이 어렵고, 스마트폰이 생활의 중심이 되어 일상에 문제가 생기는 상태를 말해요.".to_string(),
        symptoms: vec![
            item("⏰", "조절 실패", "사용 시간을 줄이려 해도 뜻대로 되지 않아요."),
            item("📱", "현저성", "하루 중 스마트폰을 사용하는 것이 가장 중요한 활동이 되었어요."),
            item("⚠️", "문제적 결과", "스마트폰 때문에 건강, 학업, 업무, 관계에 문제가 생겨요."),
        ],
        tips: vec![
            "🔕 불필요한 알림 끄기".to_string(),
            "🛏️ 잠들기 1시간 전에는 스마트폰 멀리 두기".to_string(),
            "⏳ 앱별 사용 시간 제한 설정하기".to_string(),
            "🚶 하루 30분은 스마트폰 없이 산책하기".to_string(),
        ],
    }
}

// ============ Knowledge Base ============

/// Fixed texts for the attachment tiers, linked to the catalog.
#[derive(Debug, Clone)]
pub struct PromoTexts {
    pub multi_iq_overview: String,
    pub htp: String,
    pub smartphone: String,
    pub mbti_overview: String,
}

impl PromoTexts {
    fn from_catalog(catalog: &[TestInfo]) -> Self {
        let mbti = &catalog[TestId::Mbti.index()];
        let multi_iq = &catalog[TestId::MultiIq.index()];
        let htp = &catalog[TestId::Htp.index()];
        let smartphone = &catalog[TestId::Smartphone.index()];

        Self {
            multi_iq_overview: format!(
                "우리의 지능은 한 가지가 아닙니다. 하워드 가드너의 다중지능 이론에 따르면 인간은 8가지의 다양한 지능을 가지고 있어요.\n\n나의 강점이 궁금하다면 **{}**를 이용해보세요!",
                multi_iq.link("검사하러 가기")
            ),
            htp: format!(
                "말로 표현하기 힘든 마음을 그림으로 알아볼 수 있어요.\n**{}**는 집, 나무, 사람을 그리며 무의식적인 심리 상태를 살펴보는 검사입니다. 아래 가이드를 참고해 보세요.",
                htp.link(&htp.name)
            ),
            smartphone: format!(
                "혹시 스마트폰을 너무 오래 보고 계신 건 아닌지 걱정되시나요? \n**{}**로 디지털 습관을 점검해보세요. 아래 자가진단 항목과 건강한 사용 팁도 함께 확인해 보세요.",
                smartphone.link(&smartphone.name)
            ),
            mbti_overview: format!(
                "MBTI는 16가지 성격 유형으로 사람을 분류합니다. \n자세한 내용을 아래 카드에서 확인해보세요. 본인의 유형이 궁금하다면 **{}**를 클릭하세요!",
                mbti.link("검사하러 가기")
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: Vec<TestInfo>,
    mbti_profiles: Vec<MbtiProfile>,
    multi_iq_profiles: Vec<MultiIqProfile>,
    htp_guide: HtpGuide,
    smartphone_guide: SmartphoneGuide,
    intent_categories: Vec<IntentCategory>,
    promo: PromoTexts,
}

static SHARED: Lazy<Arc<KnowledgeBase>> = Lazy::new(|| Arc::new(KnowledgeBase::builtin()));

impl KnowledgeBase {
    /// Built-in tables with the default catalog URLs.
    pub fn builtin() -> Self {
        Self::with_test_urls(&BTreeMap::new())
    }

    /// Process-wide default instance.
    pub fn shared() -> Arc<KnowledgeBase> {
        Arc::clone(&SHARED)
    }

    /// Built-in tables with catalog URLs overridden by test id
    /// (`"mbti"`, `"multi-iq"`, `"htp"`, `"smartphone"`). Unknown ids are ignored.
    pub fn with_test_urls(overrides: &BTreeMap<String, String>) -> Self {
        let mut catalog = default_catalog();
        for (id, url) in overrides {
            if let Some(test_id) = TestId::from_str(id) {
                catalog[test_id.index()].url = url.clone();
            }
        }

        let mbti_profiles = MBTI_TABLE
            .iter()
            .map(|(code, raw)| parse_mbti_record(code, raw))
            .collect();

        let multi_iq_profiles = MULTI_IQ_TABLE
            .iter()
            .map(|(name, description, jobs)| MultiIqProfile {
                name: name.to_string(),
                description: description.to_string(),
                jobs: jobs.to_string(),
            })
            .collect();

        Self {
            intent_categories: intent_categories(&catalog),
            promo: PromoTexts::from_catalog(&catalog),
            catalog,
            mbti_profiles,
            multi_iq_profiles,
            htp_guide: htp_guide(),
            smartphone_guide: smartphone_guide(),
        }
    }

    pub fn catalog(&self) -> &[TestInfo] {
        &self.catalog
    }

    pub fn test(&self, id: TestId) -> &TestInfo {
        &self.catalog[id.index()]
    }

    pub fn mbti_profiles(&self) -> &[MbtiProfile] {
        &self.mbti_profiles
    }

    pub fn mbti_profile(&self, code: &str) -> Option<&MbtiProfile> {
        self.mbti_profiles.iter().find(|p| p.code == code)
    }

    pub fn multi_iq_profiles(&self) -> &[MultiIqProfile] {
        &self.multi_iq_profiles
    }

    pub fn multi_iq_profile(&self, name: &str) -> Option<&MultiIqProfile> {
        self.multi_iq_profiles.iter().find(|p| p.name == name)
    }

    pub fn htp_guide(&self) -> &HtpGuide {
        &self.htp_guide
    }

    pub fn smartphone_guide(&self) -> &SmartphoneGuide {
        &self.smartphone_guide
    }

    pub fn intent_categories(&self) -> &[IntentCategory] {
        &self.intent_categories
    }

    pub fn intent_category(&self, key: &str) -> Option<&IntentCategory> {
        self.intent_categories.iter().find(|c| c.key == key)
    }

    pub fn promo(&self) -> &PromoTexts {
        &self.promo
    }

    pub fn fallback_responses(&self) -> &'static [&'static str] {
        &FALLBACK_RESPONSES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_fixed() {
        let kb = KnowledgeBase::builtin();
        let ids: Vec<TestId> = kb.catalog().iter().map(|t| t.id).collect();
        assert_eq!(ids, TestId::ALL.to_vec());
        for id in TestId::ALL {
            assert_eq!(kb.test(id).id, id);
        }
    }

    #[test]
    fn test_test_id_names_round_trip() {
        let names: Vec<&str> = TestId::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["mbti", "multi-iq", "htp", "smartphone"]);
        for id in TestId::ALL {
            assert_eq!(TestId::from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_parse_mbti_record() {
        let profile = parse_mbti_record("INTP", "(논리적인 사색가) 🧠: 원리를 파고듭니다.");
        assert_eq!(profile.code, "INTP");
        assert_eq!(profile.alias, "논리적인 사색가");
        assert_eq!(profile.emoji, "🧠");
        assert_eq!(profile.description, "원리를 파고듭니다.");
    }

    #[test]
    fn test_parse_mbti_record_degrades_to_description() {
        let profile = parse_mbti_record("ENFP", "no annotation here");
        assert_eq!(profile.alias, "");
        assert_eq!(profile.emoji, "");
        assert_eq!(profile.description, "no annotation here");
    }

    #[test]
    fn test_every_builtin_mbti_entry_parses() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.mbti_profiles().len(), 16);
        for profile in kb.mbti_profiles() {
            assert!(!profile.alias.is_empty(), "{} has no alias", profile.code);
            assert!(!profile.emoji.is_empty(), "{} has no emoji", profile.code);
            assert!(!profile.description.is_empty());
        }
    }

    #[test]
    fn test_multi_iq_table_order() {
        let kb = KnowledgeBase::builtin();
        let names: Vec<&str> = kb.multi_iq_profiles().iter().map(|p| p.name.as_str()).collect();
        let expected: Vec<&str> = MULTI_IQ_TABLE.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_url_override_flows_into_texts() {
        let mut overrides = BTreeMap::new();
        overrides.insert("htp".to_string(), "https://example.org/htp".to_string());
        overrides.insert("unknown".to_string(), "https://example.org/x".to_string());

        let kb = KnowledgeBase::with_test_urls(&overrides);

        assert_eq!(kb.test(TestId::Htp).url, "https://example.org/htp");
        assert!(kb.promo().htp.contains("(https://example.org/htp)"));
        assert_eq!(kb.catalog().len(), 4);
    }

    #[test]
    fn test_small_talk_categories_in_order() {
        let kb = KnowledgeBase::builtin();
        let keys: Vec<&str> = kb.intent_categories().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["greeting", "identity", "gratitude", "weather", "food", "bored", "tired"]
        );
        assert!(kb.intent_categories().iter().all(|c| !c.responses.is_empty()));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("mbti 알려줘", MBTI_KEYWORDS));
        assert!(!contains_any("hello", MBTI_KEYWORDS));
    }
}
