//! Lexicon-driven word segmentation for Chinese news text.
//!
//! Han runs are cut by forward maximum matching against the lexicon. Stretches
//! with no lexicon match fall back to character bigrams, split around common
//! function characters. ASCII letters, digits and URL/email punctuation form a
//! single token, and a digit run directly followed by a date unit keeps it
//! (`2020年`) so the cleaner can recognise dates.

use std::{collections::HashSet, fs, path::Path};

use tracing::debug;

use super::{is_han, Tokenizer};
use crate::error::{Error, Result};

const SEED_LEXICON: &[&str] = &[
    // institutions
    "联合国", "总部", "国务院", "政府", "外交部", "教育部", "公安部", "财政部", "商务部",
    "委员会", "人大", "政协", "法院", "检察院", "公司", "集团", "企业", "银行", "大学",
    "学院", "学校", "医院", "协会", "组织", "机构", "部门", "中心", "研究院", "研究所",
    "交易所", "媒体", "记者", "新华社", "央视", "华为", "腾讯", "阿里巴巴", "百度", "小米",
    // places
    "中国", "北京", "上海", "广州", "深圳", "香港", "澳门", "台湾", "美国", "日本", "韩国",
    "英国", "法国", "德国", "俄罗斯", "欧洲", "亚洲", "全国", "全球", "世界", "国际", "地区",
    "城市", "农村", "社区",
    // time words
    "今天", "昨天", "明天", "今年", "去年", "明年", "上午", "下午", "晚上", "凌晨", "近日",
    "日前", "当天", "目前", "期间", "以来", "此前", "随后",
    // event verbs and nouns
    "访问", "会见", "会谈", "出席", "参加", "举行", "召开", "举办", "发布", "宣布", "签署",
    "表示", "指出", "强调", "介绍", "透露", "报道", "发生", "造成", "导致", "启动", "开展",
    "推进", "完成", "处理", "调查", "通报", "发现", "成立", "开幕", "闭幕", "合作", "协议",
    "会议", "论坛", "峰会", "活动", "项目", "工程", "建设", "发展", "经济", "市场", "投资",
    "贸易", "金融", "科技", "技术", "创新", "产品", "服务", "管理", "政策", "改革", "安全",
    "事故", "事件", "疫情", "防控", "救援", "地震", "火灾", "暴雨", "台风", "交通", "教育",
    "文化", "体育", "比赛", "冠军", "旅游", "环境", "能源", "汽车", "手机", "网络", "数据",
    "人工智能", "互联网", "平台", "用户", "消费者", "学生", "老师", "医生", "患者", "专家",
    "代表", "领导", "主席", "总统", "总理", "部长", "市长", "省长", "书记", "董事长",
    "总裁", "经理", "员工", "工作", "问题", "情况", "方面", "进行", "相关", "重要", "主要",
    "已经", "正在", "继续", "进一步", "共同", "全面", "积极", "大家", "关注", "支持", "感谢",
    "来源", "编辑", "作者", "供稿", "完毕", "该事件", "天气", "晴朗", "新闻", "消息",
];

/// Characters emitted alone instead of being glued into fallback bigrams.
const FUNCTION_CHARS: &str = "的了是在和与及或等也都而被把将对于从向之其这那有为以据该";

/// Units that stay attached to a preceding digit run.
const DATE_UNITS: &str = "年月日号时";

/// Characters that continue an ASCII word, URL or email token.
const WORD_PUNCTUATION: &str = "@._-/:\\%+#&=?~";

/// Forward maximum matching segmenter backed by an in-memory lexicon.
#[derive(Debug, Clone)]
pub struct LexiconSegmenter {
    words: HashSet<String>,
    max_len: usize,
}

impl Default for LexiconSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSegmenter {
    /// Segmenter seeded with the built-in news lexicon.
    pub fn new() -> Self {
        Self::empty().with_words(SEED_LEXICON.iter().copied())
    }

    /// Segmenter with no lexicon; every Han run falls back to bigrams.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
            max_len: 0,
        }
    }

    /// Add words to the lexicon. Single characters are ignored.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            let len = word.chars().count();
            if len < 2 {
                continue;
            }
            self.max_len = self.max_len.max(len);
            self.words.insert(word.to_string());
        }
        self
    }

    /// Extend the lexicon from a dictionary file.
    ///
    /// One entry per line; only the first whitespace-separated column is used,
    /// so frequency/tag columns are tolerated.
    pub fn with_dictionary(self, path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| Error::load(path, err))?;
        let entries: Vec<&str> = raw
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        debug!(path = %path.display(), entries = entries.len(), "loaded user dictionary");
        Ok(self.with_words(entries))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split `text` into surface tokens. Separators are dropped.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if is_han(c) {
                let end = run_end(&chars, i, is_han);
                self.segment_han(&chars[i..end], &mut tokens);
                i = end;
            } else if is_word_char(c) {
                let mut end = run_end(&chars, i, is_word_char);
                let mut token: String = chars[i..end].iter().collect();
                if end < chars.len()
                    && DATE_UNITS.contains(chars[end])
                    && token.chars().all(|c| c.is_ascii_digit())
                {
                    token.push(chars[end]);
                    end += 1;
                }
                tokens.push(token);
                i = end;
            } else {
                i += 1;
            }
        }
        tokens
    }

    fn segment_han(&self, run: &[char], tokens: &mut Vec<String>) {
        let mut pending: Vec<char> = Vec::new();
        let mut i = 0;
        while i < run.len() {
            if let Some(len) = self.longest_match(&run[i..]) {
                flush_pending(&mut pending, tokens);
                tokens.push(run[i..i + len].iter().collect());
                i += len;
            } else if FUNCTION_CHARS.contains(run[i]) {
                flush_pending(&mut pending, tokens);
                tokens.push(run[i].to_string());
                i += 1;
            } else {
                pending.push(run[i]);
                i += 1;
            }
        }
        flush_pending(&mut pending, tokens);
    }

    fn longest_match(&self, rest: &[char]) -> Option<usize> {
        let upper = self.max_len.min(rest.len());
        (2..=upper)
            .rev()
            .find(|&len| self.words.contains(&rest[..len].iter().collect::<String>()))
    }
}

impl Tokenizer for LexiconSegmenter {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.segment(text))
    }
}

fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() && !is_han(c)) || WORD_PUNCTUATION.contains(c)
}

fn run_end(chars: &[char], start: usize, pred: fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|c| !pred(*c))
        .map_or(chars.len(), |offset| start + offset)
}

fn flush_pending(pending: &mut Vec<char>, tokens: &mut Vec<String>) {
    for chunk in pending.chunks(2) {
        tokens.push(chunk.iter().collect());
    }
    pending.clear();
}
