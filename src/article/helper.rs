//! # Helpers
//!
//! This module contains some functions to create nodes programmatically.
//!
//! See also: <https://github.com/prosemirror/prosemirror-test-builder>
use super::{Article, ArticleMark, ArticleNode, HeadingAttrs, LinkAttrs};
use crate::model::{self, AttrNode, Block, Text, TextNode};

type Fragment = model::Fragment<Article>;

impl From<&str> for Fragment {
    fn from(s: &str) -> Fragment {
        Fragment::from(vec![ArticleNode::from(s)])
    }
}

impl From<ArticleNode> for Fragment {
    fn from(node: ArticleNode) -> Fragment {
        Fragment::from(vec![node])
    }
}

fn block<A: Into<Fragment>>(content: A) -> Block<Article> {
    Block {
        content: content.into(),
    }
}

/// Create a document node.
pub fn doc<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Doc(block(content))
}

/// Create a headline node.
pub fn headline<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Headline(block(content))
}

/// Create a social headline node.
pub fn social_headline<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::SocialHeadline(block(content))
}

/// Create a subheading list.
pub fn subheading<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Subheading(block(content))
}

/// Create a subheading list entry.
pub fn subheading_item<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::SubheadingItem(block(content))
}

/// Create a summary node.
pub fn summary<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Summary(block(content))
}

/// Create the body of an article.
pub fn body<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Body(block(content))
}

/// Create a paragraph node.
pub fn p<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::Paragraph(block(content))
}

/// Create a heading node.
pub fn h<A: Into<Fragment>>(level: u8, content: A) -> ArticleNode {
    ArticleNode::Heading(AttrNode {
        attrs: HeadingAttrs { level },
        content: content.into(),
    })
}

/// Create a heading (level 1) node.
pub fn h1<A: Into<Fragment>>(content: A) -> ArticleNode {
    h(1, content)
}

/// Create a blockquote from its quote and source.
pub fn blockquote<Q: Into<Fragment>, S: Into<Fragment>>(quote: Q, source: S) -> ArticleNode {
    ArticleNode::Blockquote(block((
        ArticleNode::Quote(block(quote)),
        ArticleNode::Source(block(source)),
    )))
}

/// Create a bullet list node.
pub fn ul<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::BulletedList(block(content))
}

/// Create a numbered list node.
pub fn ol<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::NumberedList(block(content))
}

/// Create a list item node.
pub fn li<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::ListItem(block(content))
}

/// Create a code block node.
pub fn code_block<A: Into<Fragment>>(content: A) -> ArticleNode {
    ArticleNode::CodeBlock(block(content))
}

fn marked(content: &str, mark: ArticleMark) -> ArticleNode {
    ArticleNode::Text(TextNode {
        text: Text::from(content),
        marks: std::iter::once(mark).collect(),
    })
}

/// Create an emphasized text node.
pub fn em(content: &str) -> ArticleNode {
    marked(content, ArticleMark::Em)
}

/// Create a strong text node.
pub fn strong(content: &str) -> ArticleNode {
    marked(content, ArticleMark::Strong)
}

/// Create a linked text node.
pub fn link(href: &str, content: &str) -> ArticleNode {
    let attrs = LinkAttrs {
        href: href.to_owned(),
        title: None,
        target: String::from("_self"),
    };
    marked(content, ArticleMark::Link { attrs })
}

/// Create a hard break.
pub fn br() -> ArticleNode {
    ArticleNode::HardBreak
}

/// Create a node.
pub fn node<A: Into<ArticleNode>>(src: A) -> ArticleNode {
    src.into()
}
