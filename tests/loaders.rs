use std::fs;

use event_extract::{
    data::{articles, StopwordSet},
    error::Error,
};

#[test]
fn articles_load_in_file_name_order_with_short_lines_dropped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "第二篇\n \n正文内容\n").unwrap();
    fs::write(dir.path().join("a.txt"), "第一篇\n。\n\n正文").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let loaded = articles::load_articles(dir.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].text, "第一篇\n正文\n");
    assert_eq!(loaded[1].text, "第二篇\n正文内容\n");
    assert_eq!(loaded[0].source.as_deref(), Some(dir.path().join("a.txt").as_path()));
}

#[test]
fn lead_is_a_character_prefix() {
    let article = event_extract::data::Article::new("张三于2020年1月访问了联合国总部。");
    assert_eq!(article.lead(5), "张三于20");
    assert_eq!(article.lead(100), article.text);
}

#[test]
fn missing_article_dir_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = articles::load_articles(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, Error::Load { .. }));
}

#[test]
fn stopwords_merge_every_file_in_the_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cn.txt"), "的\n了\n\n我们\n").unwrap();
    fs::write(dir.path().join("en.txt"), "the\r\nand\r\n").unwrap();

    let set = StopwordSet::load_dir(dir.path()).unwrap();
    assert_eq!(set.len(), 5);
    assert!(set.contains("我们"));
    assert!(set.contains("and"));
    assert!(!set.contains(""));
}
