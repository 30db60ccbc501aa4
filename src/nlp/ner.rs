//! Pattern and gazetteer based entity recognition for Chinese sentences.
//!
//! Time expressions have recognisable formats and are matched by regex.
//! Organizations come from a small gazetteer plus institutional suffixes;
//! persons from honorific suffixes or a surname followed by a speech or
//! action cue. Recall is modest; precision on news prose is what matters for
//! candidate filtering.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{EntityCategory, EntityRecognizer, EntitySpan};
use crate::error::Result;

const KNOWN_ORGS: &[&str] = &[
    "联合国", "世界卫生组织", "世贸组织", "欧盟", "北约", "国务院", "全国人大", "全国政协",
    "外交部", "国防部", "教育部", "公安部", "财政部", "商务部", "卫健委", "发改委", "央行",
    "证监会", "银保监会", "新华社", "人民日报", "央视", "华为", "阿里巴巴", "腾讯", "百度",
    "小米", "京东", "中石油", "中石化", "国家电网",
];

static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[0-9０-９]{2,4}年(?:[0-9０-９]{1,2}月)?(?:[0-9０-９]{1,2}[日号])?",
        r"[0-9０-９]{1,2}月(?:[0-9０-９]{1,2}[日号])?",
        r"[0-9０-９]{1,2}[日号](?:[上中下]午|晚|凌晨)?",
        r"[〇零一二三四五六七八九]{4}年",
        r"[一二三四五六七八九十]{1,3}月(?:[一二三四五六七八九十]{1,3}[日号])?",
        r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}",
        r"[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}",
        r"[0-9]{1,2}[:：][0-9]{2}",
        r"[0-9]{1,2}[时点](?:[0-9]{1,2}分)?",
        r"今天|昨天|明天|前天|后天|今日|昨日|明日|今年|去年|明年|前年|本月|上月|下月|本周|上周|下周|近日|日前|当天|当日|凌晨|上午|中午|下午|傍晚|晚间|周[一二三四五六日末]|星期[一二三四五六日天]|春节|元旦|国庆",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

static ORG_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\p{Han}{2,8}?(?:有限公司|公司|集团|大学|学院|银行|委员会|协会|政府|研究院|研究所|医院|法院|检察院|公安局|管理局|教育局|交易所|基金会|联合会|电视台|报社|总部|中学|小学)",
    )
    .expect("valid regex")
});

static PERSON_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\p{Han}{2,3}?(?:先生|女士|同志|教授|院士|博士|主席|总统|总理|部长|市长|省长|书记|局长|董事长|总裁|总经理)",
    )
    .expect("valid regex")
});

static PERSON_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:欧阳|司马|诸葛|上官|东方|[王李张刘陈杨黄赵吴周徐孙马朱胡郭何高林罗郑梁谢宋唐许韩冯邓曹彭曾肖田董袁潘蒋蔡余杜叶程苏魏吕丁任沈姚卢姜崔钟谭陆汪范金石廖贾夏韦付方白邹孟熊秦邱江尹薛闫段雷侯龙史陶黎贺顾毛郝龚邵万钱严覃武戴莫孔向汤])\p{Han}{1,2}?(?:说|表示|指出|称|介绍|强调|认为|透露|于|在|访问|会见|出席|参加|宣布|等人)",
    )
    .expect("valid regex")
});

/// Default recognizer combining regex patterns with a small gazetteer.
#[derive(Debug, Clone)]
pub struct LexiconRecognizer {
    organizations: Vec<String>,
}

impl Default for LexiconRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconRecognizer {
    pub fn new() -> Self {
        Self {
            organizations: KNOWN_ORGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn push_time(&self, sentence: &str, spans: &mut Vec<EntitySpan>) {
        for pattern in TIME_PATTERNS.iter() {
            for m in pattern.find_iter(sentence) {
                push_unique(spans, EntityCategory::Time, m.start(), m.end(), m.as_str());
            }
        }
    }

    fn push_organizations(&self, sentence: &str, spans: &mut Vec<EntitySpan>) {
        for name in &self.organizations {
            for (start, matched) in sentence.match_indices(name.as_str()) {
                push_unique(
                    spans,
                    EntityCategory::Organization,
                    start,
                    start + matched.len(),
                    matched,
                );
            }
        }
        for m in ORG_SUFFIX.find_iter(sentence) {
            push_unique(spans, EntityCategory::Organization, m.start(), m.end(), m.as_str());
        }
    }

    fn push_persons(&self, sentence: &str, spans: &mut Vec<EntitySpan>) {
        for m in PERSON_TITLE.find_iter(sentence) {
            push_unique(spans, EntityCategory::Person, m.start(), m.end(), m.as_str());
        }
        for m in PERSON_CUE.find_iter(sentence) {
            push_unique(spans, EntityCategory::Person, m.start(), m.end(), m.as_str());
        }
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, sentence: &str) -> Result<Vec<EntitySpan>> {
        let mut spans = Vec::new();
        if sentence.is_empty() {
            return Ok(spans);
        }
        self.push_time(sentence, &mut spans);
        self.push_organizations(sentence, &mut spans);
        self.push_persons(sentence, &mut spans);
        spans.sort_by_key(|span| (span.start, span.end));
        Ok(spans)
    }
}

/// Keep the first span claiming a region; later overlapping spans are dropped.
fn push_unique(
    spans: &mut Vec<EntitySpan>,
    category: EntityCategory,
    start: usize,
    end: usize,
    text: &str,
) {
    let overlaps = spans
        .iter()
        .any(|span| span.category == category && !(end <= span.start || start >= span.end));
    if !overlaps {
        spans.push(EntitySpan::new(category, start, end, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(sentence: &str) -> Vec<EntityCategory> {
        LexiconRecognizer::new()
            .recognize(sentence)
            .unwrap()
            .into_iter()
            .map(|span| span.category)
            .collect()
    }

    #[test]
    fn dated_visit_has_time_person_and_org() {
        let found = categories("张三于2020年1月访问了联合国总部");
        assert!(found.contains(&EntityCategory::Time));
        assert!(found.contains(&EntityCategory::Person));
        assert!(found.contains(&EntityCategory::Organization));
    }

    #[test]
    fn relative_time_words_are_tagged() {
        let found = categories("昨日下午暴雨导致多条道路积水");
        assert!(found.contains(&EntityCategory::Time));
        assert!(!found.iter().any(|c| c.is_actor()));
    }

    #[test]
    fn org_suffix_and_title_patterns() {
        let found = categories("华北电力有限公司董事长王明出席仪式");
        assert!(found.contains(&EntityCategory::Organization));
        assert!(found.contains(&EntityCategory::Person));
    }

    #[test]
    fn plain_sentence_has_no_entities() {
        assert!(categories("该事件已处理完毕感谢大家关注和支持").is_empty());
    }
}
