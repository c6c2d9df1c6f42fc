//! # The document model
//!
//! Nodes, fragments and slices, the integer position scheme used to address them, and the
//! replace algorithm that every step is built on. Nothing in here knows about a concrete schema;
//! the node, mark and content-match types are supplied through the [`Schema`] trait.
mod content;
mod fragment;
mod marks;
mod node;
mod replace;
mod resolved_pos;
mod schema;
mod slice;
pub(crate) mod util;

pub use content::ContentMatch;
pub(crate) use fragment::Index;
pub use fragment::{Fragment, IndexError};
pub use marks::{Mark, MarkSet};
pub use node::{Node, NodeType, Text};
pub(crate) use replace::replace;
pub use replace::ReplaceError;
pub use resolved_pos::{Location, ResolveErr, ResolvedNode, ResolvedPos};
pub use schema::{AttrNode, Block, Leaf, MarkType, NodeImpl, Schema, TextNode};
pub use slice::Slice;

#[cfg(test)]
mod tests {
    use super::{
        Fragment, Index, IndexError, Location, Node, ResolveErr, ResolvedNode, ResolvedPos, Slice,
    };
    use crate::article::{helper::*, Article, ArticleNode, IframeAttrs};
    use crate::model::Leaf;
    use std::ops::Deref;

    #[test]
    fn test_null_string() {
        assert_eq!(
            serde_json::from_str::<ArticleNode>(r#"{"type": "iframe", "attrs": {"src": null}}"#)
                .unwrap(),
            ArticleNode::Iframe(Leaf {
                attrs: IframeAttrs::default()
            })
        );
    }

    #[test]
    fn test_deserialize_text() {
        assert_eq!(
            serde_json::from_str::<ArticleNode>(r#"{"type": "text", "text": "Foo"}"#).unwrap(),
            ArticleNode::text("Foo"),
        );
    }

    #[test]
    fn test_fragment_joins_text() {
        let fragment = Fragment::<Article>::from(vec![node("a"), node(""), node("b")]);
        assert_eq!(fragment.child_count(), 1);
        assert_eq!(fragment.size(), 2);
        assert_eq!(fragment.text_content(), "ab");

        let mixed = Fragment::<Article>::from(vec![node("a"), em("b"), node("c")]);
        assert_eq!(mixed.child_count(), 3);
    }

    #[test]
    fn test_size() {
        assert_eq!(node("Hello").node_size(), 5);
        assert_eq!(node("\u{1F60A}").node_size(), 2);

        let test_3 = p(("Hallo", strong("Foo")));
        assert_eq!(test_3.node_size(), 10);
        let ct_3 = test_3.content().unwrap();
        assert_eq!(ct_3.find_index(0, false), Ok(Index::new(0, 0)));
        assert_eq!(ct_3.find_index(1, false), Ok(Index::new(0, 0)));
        assert_eq!(ct_3.find_index(4, false), Ok(Index::new(0, 0)));
        assert_eq!(ct_3.find_index(4, true), Ok(Index::new(1, 5)));
        assert_eq!(ct_3.find_index(5, false), Ok(Index::new(1, 5)));
        assert_eq!(ct_3.find_index(7, false), Ok(Index::new(1, 5)));
        assert_eq!(ct_3.find_index(8, false), Ok(Index::new(2, 8)));
        assert_eq!(
            ct_3.find_index(9, false),
            Err(IndexError::OutOfRange { pos: 9, size: 8 })
        );

        assert_eq!(
            ResolvedPos::<Article>::resolve(&test_3, 0),
            Ok(ResolvedPos::new(
                0,
                vec![ResolvedNode::new(&test_3, 0, 0)],
                0
            ))
        );
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct Sol<'a> {
        node: &'a ArticleNode,
        start: usize,
        end: usize,
    }

    fn sol(node: &ArticleNode, start: usize, end: usize) -> Sol {
        Sol { node, start, end }
    }

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    enum Exp<'a> {
        Node(&'a ArticleNode),
        Str(&'static str),
        Null,
    }

    impl<'a> PartialEq<Exp<'a>> for Option<std::borrow::Cow<'a, ArticleNode>> {
        fn eq(&self, other: &Exp<'a>) -> bool {
            if let Some(node) = self {
                match other {
                    Exp::Node(exp_node) => node.deref() == *exp_node,
                    Exp::Str(text) => &node.text_content() == text,
                    Exp::Null => false,
                }
            } else {
                *other == Exp::Null
            }
        }
    }

    #[test]
    fn test_resolve() {
        let test_doc = doc((headline("ab"), body(p((em("cd"), "ef")))));
        let _doc = sol(&test_doc, 0, 12);
        let _h = sol(test_doc.child(0).unwrap(), 1, 3);
        let _body = sol(test_doc.child(1).unwrap(), 5, 11);
        let _p = sol(_body.node.child(0).unwrap(), 6, 10);

        let expected = [
            (&[_doc][..], 0, Exp::Null, Exp::Node(_h.node)),
            (&[_doc, _h], 0, Exp::Null, Exp::Str("ab")),
            (&[_doc, _h], 1, Exp::Str("a"), Exp::Str("b")),
            (&[_doc, _h], 2, Exp::Str("ab"), Exp::Null),
            (&[_doc], 4, Exp::Node(_h.node), Exp::Node(_body.node)),
            (&[_doc, _body], 0, Exp::Null, Exp::Node(_p.node)),
            (&[_doc, _body, _p], 0, Exp::Null, Exp::Str("cd")),
            (&[_doc, _body, _p], 1, Exp::Str("c"), Exp::Str("d")),
            (&[_doc, _body, _p], 2, Exp::Str("cd"), Exp::Str("ef")),
            (&[_doc, _body, _p], 3, Exp::Str("e"), Exp::Str("f")),
            (&[_doc, _body, _p], 4, Exp::Str("ef"), Exp::Null),
            (&[_doc, _body], 6, Exp::Node(_p.node), Exp::Null),
            (&[_doc], 12, Exp::Node(_body.node), Exp::Null),
        ];

        for (pos, (path, parent_offset, before, after)) in expected.iter().enumerate() {
            let pos = test_doc.resolve(pos).unwrap();
            assert_eq!(pos.depth(), path.len() - 1);

            for (i, exp_i) in path.iter().enumerate() {
                let act = sol(pos.node(i), pos.start(i), pos.end(i));
                assert_eq!((i, &act), (i, exp_i));
                if i > 0 {
                    assert_eq!(pos.before(i), Some(exp_i.start - 1));
                    assert_eq!(pos.after(i), Some(exp_i.end + 1));
                }
            }
            assert_eq!(pos.parent_offset(), *parent_offset);
            assert_eq!(pos.node_before(), *before);
            assert_eq!(pos.node_after(), *after);
        }

        assert_eq!(
            test_doc.resolve(13),
            Err(ResolveErr::RangeError { pos: 13, size: 12 })
        );
    }

    #[test]
    fn test_location_round_trip() {
        let test_doc = doc((
            headline("ab"),
            body((p(vec![em("cd"), br(), node("e\u{1F60A}f")]), ul(li(p("x"))))),
        ));
        let size = test_doc.content_size();
        for pos in 0..=size {
            match test_doc.resolve(pos) {
                Ok(rp) => {
                    let location = rp.location();
                    assert_eq!(test_doc.position_of(&location), Ok(pos), "{:?}", location);
                }
                Err(e) => assert_eq!(e, ResolveErr::SplitsCharacter { pos }),
            }
        }
    }

    #[test]
    fn test_location() {
        let test_doc = doc(body(p("a\u{1F60A}b")));
        assert_eq!(
            test_doc.resolve(3).map(|rp| rp.location()),
            Ok(Location {
                path: vec![0, 0, 0],
                text_offset: 1
            })
        );
        assert_eq!(
            test_doc.resolve(4),
            Err(ResolveErr::SplitsCharacter { pos: 4 })
        );
        assert_eq!(
            test_doc.position_of(&Location {
                path: vec![0, 0, 1],
                text_offset: 0
            }),
            Ok(6)
        );
        assert_eq!(
            test_doc.position_of(&Location {
                path: vec![0, 0, 0],
                text_offset: 2
            }),
            Err(ResolveErr::InvalidLocation { depth: 2 })
        );
        assert_eq!(
            test_doc.position_of(&Location {
                path: vec![0, 0, 0, 0],
                text_offset: 0
            }),
            Err(ResolveErr::InvalidLocation { depth: 2 })
        );
        assert_eq!(
            test_doc.position_of(&Location {
                path: vec![3],
                text_offset: 0
            }),
            Err(ResolveErr::InvalidLocation { depth: 0 })
        );
    }

    #[test]
    fn test_slice() {
        let test_doc = doc(body((p("one"), p("two"))));
        let slice = test_doc.slice(4..8, false).unwrap();
        assert_eq!(
            slice,
            Slice::new(Fragment::from((p("e"), p("t"))), 1, 1)
        );
        assert_eq!(slice.size(), 4);
        assert_eq!(test_doc.slice(3..3, false), Ok(Slice::default()));
        assert_eq!(
            test_doc.slice(3..5, false),
            Ok(Slice::new(Fragment::from("ne"), 0, 0))
        );
    }
}
