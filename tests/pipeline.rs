mod common;

use common::{DocumentTrainer, KeywordRecognizer, ShortTrainer};
use event_extract::{
    data::{Article, StopwordSet},
    error::{Error, Result},
    events::{CandidateExtractor, CandidatePass, EventPipeline, PipelineOptions, SelectorOptions},
    nlp::{ner::LexiconRecognizer, segment::LexiconSegmenter, EntityCategory, Tokenizer},
    topics::{GibbsConfig, GibbsSampler},
};

const VISIT: &str = "张三于2020年1月访问了联合国总部。双方就合作问题交换了意见。";

fn articles(texts: &[&str]) -> Vec<Article> {
    texts.iter().map(|t| Article::new(*t)).collect()
}

#[test]
fn short_article_yields_no_events() {
    let segmenter = LexiconSegmenter::new();
    let recognizer = LexiconRecognizer::new();
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer);
    let batch = articles(&["今日天气晴朗。"]);

    let outcome = pipeline.run(&batch, &StopwordSet::new()).unwrap();
    assert_eq!(outcome.candidates, vec![Vec::<String>::new()]);
    assert_eq!(outcome.events, vec![Vec::<String>::new()]);
}

#[test]
fn dated_visit_is_a_primary_candidate_and_event() {
    let recognizer = LexiconRecognizer::new();
    let (candidates, pass) = CandidateExtractor::new(&recognizer)
        .extract_with_pass(VISIT)
        .unwrap();
    assert_eq!(pass, CandidatePass::Primary);
    assert_eq!(candidates, vec!["张三于2020年1月访问了联合国总部"]);

    let segmenter = LexiconSegmenter::new();
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer);
    let outcome = pipeline.run(&articles(&[VISIT]), &StopwordSet::new()).unwrap();
    insta::assert_snapshot!(outcome.events[0].join("|"), @"张三于2020年1月访问了联合国总部。");
}

#[test]
fn boilerplate_only_article_falls_back_to_first_candidate() {
    let sentence = "据来源报道，该事件已处理完毕，感谢大家关注和支持。";
    let segmenter = LexiconSegmenter::new();
    let recognizer = KeywordRecognizer::new(&[("该事件", EntityCategory::Time)]);
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer);

    let outcome = pipeline.run(&articles(&[sentence]), &StopwordSet::new()).unwrap();
    assert_eq!(
        outcome.candidates[0],
        vec!["据来源报道，该事件已处理完毕，感谢大家关注和支持"]
    );
    assert_eq!(
        outcome.events[0],
        vec!["据来源报道，该事件已处理完毕，感谢大家关注和支持。"]
    );
}

#[test]
fn outcome_lists_stay_aligned_with_the_batch() {
    let segmenter = LexiconSegmenter::new();
    let recognizer = LexiconRecognizer::new();
    let sampler = GibbsSampler::new(GibbsConfig {
        iterations: 60,
        burn_in: 10,
        sample_lag: 5,
        seed: Some(11),
        ..GibbsConfig::default()
    })
    .unwrap();
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &sampler);
    let batch = articles(&[
        VISIT,
        "今日天气晴朗。",
        "2021年3月5日上午，北京市政府召开新闻发布会，通报疫情防控情况。记者：\n李四",
    ]);

    let outcome = pipeline.run(&batch, &StopwordSet::new()).unwrap();
    assert_eq!(outcome.topics.len(), batch.len());
    assert_eq!(outcome.candidates.len(), batch.len());
    assert_eq!(outcome.events.len(), batch.len());
    for (events, candidates) in outcome.events.iter().zip(&outcome.candidates) {
        assert!(events.len() <= 3);
        assert_eq!(events.is_empty(), candidates.is_empty());
    }
    assert!(outcome.topics.iter().all(|t| t.len() <= 64));
}

fn company_recognizer() -> KeywordRecognizer {
    KeywordRecognizer::new(&[
        ("2020年", EntityCategory::Time),
        ("公司", EntityCategory::Organization),
    ])
}

#[test]
fn actor_sentences_win_over_time_only_sentences() {
    let recognizer = company_recognizer();
    let extractor = CandidateExtractor::new(&recognizer);
    let article = "2020年公司发布了新产品新产品新产品。\
                   2020年市场反应非常热烈大家都很关注。\
                   没有时间的句子但是长度足够十六个字了。";

    let (candidates, pass) = extractor.extract_with_pass(article).unwrap();
    assert_eq!(pass, CandidatePass::Primary);
    assert_eq!(candidates, vec!["2020年公司发布了新产品新产品新产品"]);
}

#[test]
fn time_only_pass_still_requires_a_time() {
    let recognizer = company_recognizer();
    let extractor = CandidateExtractor::new(&recognizer);
    let article = "2020年市场反应非常热烈大家都很关注。\
                   没有时间的句子但是长度足够十六个字了。";

    let (candidates, pass) = extractor.extract_with_pass(article).unwrap();
    assert_eq!(pass, CandidatePass::TimeOnly);
    assert_eq!(candidates, vec!["2020年市场反应非常热烈大家都很关注"]);
}

#[test]
fn sentences_shorter_than_sixteen_chars_are_dropped() {
    let recognizer = company_recognizer();
    let extractor = CandidateExtractor::new(&recognizer);

    let (candidates, pass) = extractor
        .extract_with_pass("2020年公司发布了新产品一二三。2020年公司发布了新产品一二。")
        .unwrap();
    assert_eq!(pass, CandidatePass::Primary);
    assert_eq!(candidates, vec!["2020年公司发布了新产品一二三"]);

    let (candidates, pass) = extractor
        .extract_with_pass("2020年公司发布了新产品一二。")
        .unwrap();
    assert_eq!(pass, CandidatePass::Empty);
    assert!(candidates.is_empty());
}

#[test]
fn selection_cap_is_configurable() {
    let text = "2020年张三在会上发言。\n2020年李四在会上发言。\n2020年王五在会上发言。";
    let segmenter = LexiconSegmenter::new();
    let recognizer = KeywordRecognizer::new(&[
        ("2020年", EntityCategory::Time),
        ("在会上", EntityCategory::Person),
    ]);
    let options = PipelineOptions {
        min_sentence_chars: 4,
        selector: SelectorOptions { max_events: 2 },
        ..PipelineOptions::default()
    };
    let pipeline =
        EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer).with_options(options);

    let outcome = pipeline.run(&articles(&[text]), &StopwordSet::new()).unwrap();
    assert_eq!(outcome.candidates[0].len(), 3);
    assert_eq!(
        outcome.events[0],
        vec!["2020年张三在会上发言。", "2020年李四在会上发言。"]
    );
}

#[test]
fn short_topic_list_is_an_alignment_failure() {
    let segmenter = LexiconSegmenter::new();
    let recognizer = LexiconRecognizer::new();
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &ShortTrainer);

    let err = pipeline
        .run(&articles(&[VISIT, VISIT]), &StopwordSet::new())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Alignment {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn fully_filtered_batch_has_empty_vocabulary() {
    let segmenter = LexiconSegmenter::new();
    let recognizer = LexiconRecognizer::new();
    let pipeline = EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer);
    let stopwords = StopwordSet::from_words(["天气", "晴朗", "今日"]);

    let err = pipeline
        .run(&articles(&["今日天气晴朗。", "的了是"]), &stopwords)
        .unwrap_err();
    assert!(matches!(err, Error::EmptyVocabulary { documents: 2 }));
}

struct BrokenTokenizer;

impl Tokenizer for BrokenTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<String>> {
        Err(Error::engine("tokenizer", "model file missing"))
    }
}

#[test]
fn engine_failures_propagate() {
    let recognizer = LexiconRecognizer::new();
    let pipeline = EventPipeline::new(&BrokenTokenizer, &recognizer, &DocumentTrainer);

    let err = pipeline
        .run(&articles(&[VISIT]), &StopwordSet::new())
        .unwrap_err();
    assert!(matches!(err, Error::Engine { engine: "tokenizer", .. }));
}

#[test]
fn zero_event_cap_is_rejected() {
    let segmenter = LexiconSegmenter::new();
    let recognizer = LexiconRecognizer::new();
    let options = PipelineOptions {
        selector: SelectorOptions { max_events: 0 },
        ..PipelineOptions::default()
    };
    let pipeline =
        EventPipeline::new(&segmenter, &recognizer, &DocumentTrainer).with_options(options);
    let err = pipeline
        .run(&articles(&[VISIT]), &StopwordSet::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}
