use pretty_assertions::assert_eq;
use prosemirror_replay::article::helper::{
    body, doc, headline, p, social_headline, subheading, subheading_item, summary,
};
use prosemirror_replay::article::{Article, ArticleNode, ArticleNodeType};
use prosemirror_replay::model::{Fragment, Node, ReplaceError, Schema, Slice};
use prosemirror_replay::replay::{
    compact, replay, replay_from_empty, replay_with, ReplayFailure, ReplayOptions,
};
use prosemirror_replay::transform::{ReplaceStep, Step, StepError};

const SESSION: &str = include_str!("fixtures/article_session.json");
const FOLLOWUP: &str = include_str!("fixtures/article_followup.json");

fn session() -> Vec<Step<Article>> {
    serde_json::from_str(SESSION).unwrap()
}

fn followup() -> Vec<Step<Article>> {
    serde_json::from_str(FOLLOWUP).unwrap()
}

fn nothing() -> Vec<ArticleNode> {
    Vec::new()
}

/// The title area of a fresh article followed by the given body
fn article(paragraphs: Vec<ArticleNode>) -> ArticleNode {
    doc(vec![
        headline(nothing()),
        social_headline(nothing()),
        subheading(subheading_item(nothing())),
        summary(nothing()),
        body(paragraphs),
    ])
}

fn insert(pos: usize, text: &str) -> Step<Article> {
    Step::from(ReplaceStep::new(
        pos,
        pos,
        Slice::new(Fragment::from(text), 0, 0),
    ))
}

fn compacted() -> ReplayOptions {
    ReplayOptions { compact: true }
}

#[test]
fn test_session() {
    let steps = session();
    assert_eq!(steps.len(), 114);
    assert_eq!(steps.iter().filter(|s| s.is_structural()).count(), 3);

    let expected = article(vec![
        p("Sixty is a major birthday in many Asian cultures and so, the "),
        p(""),
        p("for Hong Kong\u{2019}s most elite club of Chinese art collectors, it is a birthday that deserves\u{a0}"),
        p(", a marking maturity\u{a0} \u{a0} The Min Chiu Society\u{2019}s 60th anniversary exhibition has finally opened to the public, after\u{a0}"),
    ]);
    assert_eq!(replay_from_empty(&steps), Ok(expected));
}

#[test]
fn test_session_prefixes() {
    let steps = session();
    assert_eq!(
        replay_from_empty(&steps[..18]),
        Ok(article(vec![p(
            "Turning 60 is a major lanThe Min Chiu Society\u{2019}s 60th anniversary exhibition has finally opened to the public, after\u{a0}"
        )]))
    );
    assert_eq!(
        replay_from_empty(&steps[..55]),
        Ok(article(vec![p(
            "Sixty is a major birthday in many Asian cultures, a marking maturity\u{a0} \u{a0} The Min Chiu Society\u{2019}s 60th anniversary exhibition has finally opened to the public, after\u{a0}"
        )]))
    );
}

#[test]
fn test_session_compacted() {
    let steps = session();
    let merged = compact(&steps);
    assert_eq!(merged.len(), 107);

    let empty = Article::empty_doc();
    let stepwise = replay(&empty, &steps);
    assert!(stepwise.is_ok());
    assert_eq!(replay(&empty, &merged), stepwise);
    assert_eq!(replay_with(&empty, &steps, compacted()), stepwise);
}

#[test]
fn test_session_with_compacted_followup() {
    let steps = session();
    let more = followup();
    let merged = compact(&more);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0], Step::from(ReplaceStep::delete(69, 71)));

    let expected = article(vec![
        p("Sixty is a major birthday in many Asian cultures and so, for Hong Kong\u{2019}s most elite club of Chinese art collectors, it is a birthday that deserves\u{a0}"),
        p(", a marking maturity\u{a0} \u{a0} The Min Chiu Society\u{2019}s 60th anniversary exhibition has finally opened to the public, after\u{a0}"),
    ]);

    let all: Vec<_> = steps.iter().chain(more.iter()).cloned().collect();
    assert_eq!(replay_from_empty(&all), Ok(expected.clone()));

    let appended: Vec<_> = steps.into_iter().chain(merged).collect();
    assert_eq!(replay_from_empty(&appended), Ok(expected.clone()));
    assert_eq!(
        replay_with(&Article::empty_doc(), &all, compacted()),
        Ok(expected)
    );
}

#[test]
fn test_compact_is_stable() {
    let merged = compact(&session());
    assert_eq!(compact(&merged), merged);
}

#[test]
fn test_insert_before_insert() {
    let steps = vec![
        Step::from(ReplaceStep::new(
            0,
            0,
            Slice::new(Fragment::from(body(p(""))), 0, 0),
        )),
        insert(2, "Hi"),
        insert(2, " there"),
    ];
    let expected = doc(body(p(" thereHi")));
    assert_eq!(replay_from_empty(&steps), Ok(expected.clone()));
    assert_eq!(
        replay_with(&Article::empty_doc(), &steps, compacted()),
        Ok(expected)
    );
    assert_eq!(compact(&steps).len(), 2);
}

#[test]
fn test_insert_after_insert() {
    let steps = vec![
        Step::from(ReplaceStep::new(
            0,
            0,
            Slice::new(Fragment::from(body(p(""))), 0, 0),
        )),
        insert(2, "Hi"),
        insert(4, " there"),
    ];
    let expected = doc(body(p("Hi there")));
    assert_eq!(replay_from_empty(&steps), Ok(expected.clone()));
    assert_eq!(
        replay_with(&Article::empty_doc(), &steps, compacted()),
        Ok(expected)
    );
}

#[test]
fn test_paragraph_outside_of_body() {
    let first = Step::<Article>::from(ReplaceStep::new(
        0,
        0,
        Slice::new(Fragment::from(p("")), 0, 0),
    ));
    let steps = vec![first.clone(), insert(1, "Hi")];
    assert_eq!(
        replay_from_empty(&steps),
        Err(ReplayFailure {
            index: 0,
            step: first,
            cause: StepError::InvalidStructure(ReplaceError::InvalidContent(
                ArticleNodeType::Doc
            )),
        })
    );
}

#[test]
fn test_fails_at_first_bad_step() {
    let mut steps = session();
    steps.truncate(10);
    let bad = insert(10_000, "x");
    steps.push(bad.clone());
    steps.extend(session().into_iter().skip(10));

    let size = replay_from_empty(&steps[..10]).unwrap().content_size();
    let expected = ReplayFailure {
        index: 10,
        step: bad,
        cause: StepError::OutOfRange { pos: 10_000, size },
    };
    assert_eq!(replay_from_empty(&steps), Err(expected.clone()));
    assert_eq!(
        replay_with(&Article::empty_doc(), &steps, compacted()),
        Err(expected)
    );
}

#[test]
fn test_no_op_step() {
    let steps = session();
    let before = replay_from_empty(&steps[..30]).unwrap();
    let no_op = Step::<Article>::from(ReplaceStep::delete(20, 20));
    assert_eq!(replay(&before, &[no_op]), Ok(before.clone()));
}
