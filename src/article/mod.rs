//! # The article schema
//!
//! This module contains the content model of a news article editor: a title area (headline,
//! social headline, subheadings and summary), the body, and photo galleries. Its JSON form is the
//! one written by the editor, so recorded step logs can be deserialized directly.
mod attrs;
mod content;
pub mod helper;
mod schema;

use crate::model::{AttrNode, Block, Fragment, Leaf, Mark, MarkType, Node, NodeImpl, TextNode};
pub use attrs::{
    FileAttrs, HeadingAttrs, HiddenTextAttrs, IframeAttrs, LinkAttrs, NoteAttrs, OembedAttrs,
    UnidentifiedAttrs,
};
pub use content::ArticleContentMatch;
pub use schema::{Article, ArticleNodeType};

use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// The node type for the article schema
#[derive(Debug, Derivative, Deserialize, Serialize, PartialEq, Eq)]
#[derivative(Clone(bound = ""))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleNode {
    /// The document root
    Doc(Block<Article>),
    /// A text node
    Text(TextNode<Article>),
    /// The headline of the article
    Headline(Block<Article>),
    /// The headline used when sharing the article
    SocialHeadline(Block<Article>),
    /// A list of subheadings
    Subheading(Block<Article>),
    /// A free-standing subheading text
    SubheadingText(Block<Article>),
    /// A single subheading
    SubheadingItem(Block<Article>),
    /// The summary below the headlines
    Summary(Block<Article>),
    /// A paragraph
    Paragraph(Block<Article>),
    /// A quote with its source
    Blockquote(Block<Article>),
    /// The quoted text
    Quote(Block<Article>),
    /// The source of a quote
    Source(Block<Article>),
    /// An embedded `<iframe>`
    Iframe(Leaf<IframeAttrs>),
    /// An image in the body
    ImageInline(Block<Article>),
    /// The caption of an inline image
    ImageInlineCaption(Block<Article>),
    /// The file of an inline image
    ImageInlineFile(Leaf<FileAttrs>),
    /// An ordered list
    NumberedList(Block<Article>),
    /// A bullet list
    BulletedList(Block<Article>),
    /// A list item
    ListItem(Block<Article>),
    /// The body of the article
    Body(Block<Article>),
    /// A hard break `<br>`
    HardBreak,
    /// A gallery of photos
    PhotoGallery(Block<Article>),
    /// A photo in a gallery
    PhotoGalleryItem(Block<Article>),
    /// The file of a gallery photo
    PhotoGalleryFile(Leaf<FileAttrs>),
    /// The caption of a gallery photo
    PhotoGalleryCaption(Block<Article>),
    /// A code block
    CodeBlock(Block<Article>),
    /// A heading inside of the body
    Heading(AttrNode<Article, HeadingAttrs>),
    /// An oEmbed node
    Oembed(Leaf<OembedAttrs>),
    /// Content the editor could not identify
    Unidentified(Leaf<UnidentifiedAttrs>),
}

impl From<TextNode<Article>> for ArticleNode {
    fn from(text_node: TextNode<Article>) -> Self {
        Self::Text(text_node)
    }
}

impl Node<Article> for ArticleNode {
    fn r#type(&self) -> ArticleNodeType {
        match self {
            Self::Doc(_) => ArticleNodeType::Doc,
            Self::Text(_) => ArticleNodeType::Text,
            Self::Headline(_) => ArticleNodeType::Headline,
            Self::SocialHeadline(_) => ArticleNodeType::SocialHeadline,
            Self::Subheading(_) => ArticleNodeType::Subheading,
            Self::SubheadingText(_) => ArticleNodeType::SubheadingText,
            Self::SubheadingItem(_) => ArticleNodeType::SubheadingItem,
            Self::Summary(_) => ArticleNodeType::Summary,
            Self::Paragraph(_) => ArticleNodeType::Paragraph,
            Self::Blockquote(_) => ArticleNodeType::Blockquote,
            Self::Quote(_) => ArticleNodeType::Quote,
            Self::Source(_) => ArticleNodeType::Source,
            Self::Iframe(_) => ArticleNodeType::Iframe,
            Self::ImageInline(_) => ArticleNodeType::ImageInline,
            Self::ImageInlineCaption(_) => ArticleNodeType::ImageInlineCaption,
            Self::ImageInlineFile(_) => ArticleNodeType::ImageInlineFile,
            Self::NumberedList(_) => ArticleNodeType::NumberedList,
            Self::BulletedList(_) => ArticleNodeType::BulletedList,
            Self::ListItem(_) => ArticleNodeType::ListItem,
            Self::Body(_) => ArticleNodeType::Body,
            Self::HardBreak => ArticleNodeType::HardBreak,
            Self::PhotoGallery(_) => ArticleNodeType::PhotoGallery,
            Self::PhotoGalleryItem(_) => ArticleNodeType::PhotoGalleryItem,
            Self::PhotoGalleryFile(_) => ArticleNodeType::PhotoGalleryFile,
            Self::PhotoGalleryCaption(_) => ArticleNodeType::PhotoGalleryCaption,
            Self::CodeBlock(_) => ArticleNodeType::CodeBlock,
            Self::Heading(_) => ArticleNodeType::Heading,
            Self::Oembed(_) => ArticleNodeType::Oembed,
            Self::Unidentified(_) => ArticleNodeType::Unidentified,
        }
    }

    fn text_node(&self) -> Option<&TextNode<Article>> {
        if let Self::Text(node) = self {
            Some(node)
        } else {
            None
        }
    }

    fn content(&self) -> Option<&Fragment<Article>> {
        match self {
            Self::Doc(block)
            | Self::Headline(block)
            | Self::SocialHeadline(block)
            | Self::Subheading(block)
            | Self::SubheadingText(block)
            | Self::SubheadingItem(block)
            | Self::Summary(block)
            | Self::Paragraph(block)
            | Self::Blockquote(block)
            | Self::Quote(block)
            | Self::Source(block)
            | Self::ImageInline(block)
            | Self::ImageInlineCaption(block)
            | Self::NumberedList(block)
            | Self::BulletedList(block)
            | Self::ListItem(block)
            | Self::Body(block)
            | Self::PhotoGallery(block)
            | Self::PhotoGalleryItem(block)
            | Self::PhotoGalleryCaption(block)
            | Self::CodeBlock(block) => block.content(),
            Self::Heading(node) => node.content(),
            Self::Text(_)
            | Self::Iframe(_)
            | Self::ImageInlineFile(_)
            | Self::HardBreak
            | Self::PhotoGalleryFile(_)
            | Self::Oembed(_)
            | Self::Unidentified(_) => None,
        }
    }

    fn copy<F>(&self, map: F) -> Self
    where
        F: FnOnce(&Fragment<Article>) -> Fragment<Article>,
    {
        match self {
            Self::Doc(block) => Self::Doc(block.copy(map)),
            Self::Headline(block) => Self::Headline(block.copy(map)),
            Self::SocialHeadline(block) => Self::SocialHeadline(block.copy(map)),
            Self::Subheading(block) => Self::Subheading(block.copy(map)),
            Self::SubheadingText(block) => Self::SubheadingText(block.copy(map)),
            Self::SubheadingItem(block) => Self::SubheadingItem(block.copy(map)),
            Self::Summary(block) => Self::Summary(block.copy(map)),
            Self::Paragraph(block) => Self::Paragraph(block.copy(map)),
            Self::Blockquote(block) => Self::Blockquote(block.copy(map)),
            Self::Quote(block) => Self::Quote(block.copy(map)),
            Self::Source(block) => Self::Source(block.copy(map)),
            Self::ImageInline(block) => Self::ImageInline(block.copy(map)),
            Self::ImageInlineCaption(block) => Self::ImageInlineCaption(block.copy(map)),
            Self::NumberedList(block) => Self::NumberedList(block.copy(map)),
            Self::BulletedList(block) => Self::BulletedList(block.copy(map)),
            Self::ListItem(block) => Self::ListItem(block.copy(map)),
            Self::Body(block) => Self::Body(block.copy(map)),
            Self::PhotoGallery(block) => Self::PhotoGallery(block.copy(map)),
            Self::PhotoGalleryItem(block) => Self::PhotoGalleryItem(block.copy(map)),
            Self::PhotoGalleryCaption(block) => Self::PhotoGalleryCaption(block.copy(map)),
            Self::CodeBlock(block) => Self::CodeBlock(block.copy(map)),
            Self::Heading(node) => Self::Heading(node.copy(map)),
            Self::Text(_)
            | Self::Iframe(_)
            | Self::ImageInlineFile(_)
            | Self::HardBreak
            | Self::PhotoGalleryFile(_)
            | Self::Oembed(_)
            | Self::Unidentified(_) => self.clone(),
        }
    }
}

impl From<&str> for ArticleNode {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// The marks that can be on some span
#[derive(Debug, Hash, Eq, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleMark {
    /// Text that can be toggled invisible in the title area
    HiddenText {
        /// The attributes
        #[serde(default)]
        attrs: HiddenTextAttrs,
    },
    /// bold
    Strong,
    /// italics
    Em,
    /// underlined
    Underline,
    /// An editorial note on the text
    Note {
        /// The attributes
        #[serde(default)]
        attrs: NoteAttrs,
    },
    /// hyper-linked
    Link {
        /// The attributes
        attrs: LinkAttrs,
    },
    /// all caps
    Shouting,
}

impl Mark<Article> for ArticleMark {
    fn r#type(&self) -> ArticleMarkType {
        match self {
            Self::HiddenText { .. } => ArticleMarkType::HiddenText,
            Self::Strong => ArticleMarkType::Strong,
            Self::Em => ArticleMarkType::Em,
            Self::Underline => ArticleMarkType::Underline,
            Self::Note { .. } => ArticleMarkType::Note,
            Self::Link { .. } => ArticleMarkType::Link,
            Self::Shouting => ArticleMarkType::Shouting,
        }
    }
}

/// The type of an article mark.
#[derive(Debug, Hash, Eq, Copy, Clone, PartialEq, PartialOrd, Ord)]
pub enum ArticleMarkType {
    /// hidden
    HiddenText,
    /// bold
    Strong,
    /// italics
    Em,
    /// underlined
    Underline,
    /// note
    Note,
    /// hyper-linked
    Link,
    /// all caps
    Shouting,
}

impl MarkType for ArticleMarkType {}
