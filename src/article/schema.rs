use super::{ArticleContentMatch, ArticleMark, ArticleMarkType, ArticleNode};
use crate::model::{Block, NodeType, Schema};

/// The article schema type
pub struct Article;

impl Schema for Article {
    type Node = ArticleNode;
    type Mark = ArticleMark;
    type MarkType = ArticleMarkType;
    type NodeType = ArticleNodeType;
    type ContentMatch = ArticleContentMatch;

    fn empty_doc() -> ArticleNode {
        ArticleNode::Doc(Block::default())
    }
}

/// The node-spec type for the article schema
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArticleNodeType {
    /// The document root
    Doc,
    /// A text node
    Text,
    /// The headline of the article
    Headline,
    /// The headline used when sharing the article
    SocialHeadline,
    /// A list of subheadings
    Subheading,
    /// A free-standing subheading text
    SubheadingText,
    /// A single subheading
    SubheadingItem,
    /// The summary below the headlines
    Summary,
    /// A paragraph
    Paragraph,
    /// A quote with its source
    Blockquote,
    /// The quoted text
    Quote,
    /// The source of a quote
    Source,
    /// An embedded `<iframe>`
    Iframe,
    /// An image in the body
    ImageInline,
    /// The caption of an inline image
    ImageInlineCaption,
    /// The file of an inline image
    ImageInlineFile,
    /// An ordered list
    NumberedList,
    /// A bullet list
    BulletedList,
    /// A list item
    ListItem,
    /// The body of the article
    Body,
    /// A hard break `<br>`
    HardBreak,
    /// A gallery of photos
    PhotoGallery,
    /// A photo in a gallery
    PhotoGalleryItem,
    /// The file of a gallery photo
    PhotoGalleryFile,
    /// The caption of a gallery photo
    PhotoGalleryCaption,
    /// A code block
    CodeBlock,
    /// A heading inside of the body
    Heading,
    /// An oEmbed node
    Oembed,
    /// Content the editor could not identify
    Unidentified,
}

impl ArticleNodeType {
    /// Every node type of the schema
    pub const ALL: [ArticleNodeType; 29] = [
        Self::Doc,
        Self::Text,
        Self::Headline,
        Self::SocialHeadline,
        Self::Subheading,
        Self::SubheadingText,
        Self::SubheadingItem,
        Self::Summary,
        Self::Paragraph,
        Self::Blockquote,
        Self::Quote,
        Self::Source,
        Self::Iframe,
        Self::ImageInline,
        Self::ImageInlineCaption,
        Self::ImageInlineFile,
        Self::NumberedList,
        Self::BulletedList,
        Self::ListItem,
        Self::Body,
        Self::HardBreak,
        Self::PhotoGallery,
        Self::PhotoGalleryItem,
        Self::PhotoGalleryFile,
        Self::PhotoGalleryCaption,
        Self::CodeBlock,
        Self::Heading,
        Self::Oembed,
        Self::Unidentified,
    ];

    /// Members of the `block` group, i.e. the top level sections of an article
    pub(crate) fn is_block_group(self) -> bool {
        matches!(
            self,
            Self::Headline
                | Self::SocialHeadline
                | Self::Subheading
                | Self::SubheadingText
                | Self::Summary
                | Self::Body
                | Self::PhotoGallery
        )
    }

    /// Members of the `body_group` group, i.e. what may appear in the body
    pub(crate) fn is_body_group(self) -> bool {
        matches!(
            self,
            Self::Paragraph
                | Self::Blockquote
                | Self::Iframe
                | Self::ImageInline
                | Self::NumberedList
                | Self::BulletedList
                | Self::CodeBlock
                | Self::Heading
                | Self::Oembed
                | Self::Unidentified
        )
    }
}

impl NodeType<Article> for ArticleNodeType {
    fn allows_mark_type(self, mark_type: ArticleMarkType) -> bool {
        match self {
            Self::Headline
            | Self::SocialHeadline
            | Self::Subheading
            | Self::SubheadingText
            | Self::SubheadingItem
            | Self::Summary => mark_type == ArticleMarkType::HiddenText,
            Self::Paragraph | Self::Heading => true,
            _ => false,
        }
    }

    fn is_inline(self) -> bool {
        matches!(self, Self::Text | Self::HardBreak)
    }

    fn is_atom(self) -> bool {
        matches!(self, Self::CodeBlock)
    }

    fn content_match(self) -> ArticleContentMatch {
        match self {
            Self::Doc => ArticleContentMatch::BlockStar,
            Self::Headline
            | Self::SocialHeadline
            | Self::SubheadingItem
            | Self::Summary
            | Self::Quote
            | Self::Source
            | Self::ImageInlineCaption
            | Self::PhotoGalleryCaption
            | Self::CodeBlock => ArticleContentMatch::TextStar,
            Self::Subheading => ArticleContentMatch::SubheadingItemPlus,
            Self::SubheadingText | Self::Paragraph | Self::Heading => {
                ArticleContentMatch::InlineStar
            }
            Self::Blockquote => ArticleContentMatch::QuoteThenSource,
            Self::ImageInline => ArticleContentMatch::ImageFileThenCaption,
            Self::NumberedList | Self::BulletedList => ArticleContentMatch::ListItemPlus,
            Self::ListItem => ArticleContentMatch::ParagraphPlus,
            Self::Body => ArticleContentMatch::BodyGroupPlus,
            Self::PhotoGallery => ArticleContentMatch::PhotoGalleryItemStar,
            Self::PhotoGalleryItem => ArticleContentMatch::GalleryFileThenCaption,
            Self::Text
            | Self::Iframe
            | Self::ImageInlineFile
            | Self::HardBreak
            | Self::PhotoGalleryFile
            | Self::Oembed
            | Self::Unidentified => ArticleContentMatch::Empty,
        }
    }

    fn compatible_content(self, other: Self) -> bool {
        self == other || self.content_match().compatible(other.content_match())
    }
}
