use super::{Article, ArticleNodeType};
use crate::model::ContentMatch;

/// The content match type for the article schema
///
/// Each variant is a state of one of the content expressions used by the schema.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArticleContentMatch {
    /// `block*`
    BlockStar,
    /// `text*`
    TextStar,
    /// `inline*`
    InlineStar,
    /// `subheading_item+`
    SubheadingItemPlus,
    /// `subheading_item*`
    SubheadingItemStar,
    /// `quote source`
    QuoteThenSource,
    /// `source`
    Source,
    /// `image_inline_file image_inline_caption`
    ImageFileThenCaption,
    /// `image_inline_caption`
    ImageCaption,
    /// `list_item+`
    ListItemPlus,
    /// `list_item*`
    ListItemStar,
    /// `paragraph+`
    ParagraphPlus,
    /// `paragraph*`
    ParagraphStar,
    /// `body_group+`
    BodyGroupPlus,
    /// `body_group*`
    BodyGroupStar,
    /// `photo_gallery_item*`
    PhotoGalleryItemStar,
    /// `photo_gallery_file photo_gallery_caption`
    GalleryFileThenCaption,
    /// `photo_gallery_caption`
    GalleryCaption,
    /// empty
    Empty,
}

impl ContentMatch<Article> for ArticleContentMatch {
    fn match_type(self, r#type: ArticleNodeType) -> Option<Self> {
        use ArticleNodeType as T;
        let (matches, next) = match self {
            Self::BlockStar => (r#type.is_block_group(), Self::BlockStar),
            Self::TextStar => (r#type == T::Text, Self::TextStar),
            Self::InlineStar => (
                matches!(r#type, T::Text | T::HardBreak),
                Self::InlineStar,
            ),
            Self::SubheadingItemPlus | Self::SubheadingItemStar => {
                (r#type == T::SubheadingItem, Self::SubheadingItemStar)
            }
            Self::QuoteThenSource => (r#type == T::Quote, Self::Source),
            Self::Source => (r#type == T::Source, Self::Empty),
            Self::ImageFileThenCaption => (r#type == T::ImageInlineFile, Self::ImageCaption),
            Self::ImageCaption => (r#type == T::ImageInlineCaption, Self::Empty),
            Self::ListItemPlus | Self::ListItemStar => (r#type == T::ListItem, Self::ListItemStar),
            Self::ParagraphPlus | Self::ParagraphStar => {
                (r#type == T::Paragraph, Self::ParagraphStar)
            }
            Self::BodyGroupPlus | Self::BodyGroupStar => {
                (r#type.is_body_group(), Self::BodyGroupStar)
            }
            Self::PhotoGalleryItemStar => {
                (r#type == T::PhotoGalleryItem, Self::PhotoGalleryItemStar)
            }
            Self::GalleryFileThenCaption => (r#type == T::PhotoGalleryFile, Self::GalleryCaption),
            Self::GalleryCaption => (r#type == T::PhotoGalleryCaption, Self::Empty),
            Self::Empty => (false, Self::Empty),
        };
        if matches {
            Some(next)
        } else {
            None
        }
    }

    fn valid_end(self) -> bool {
        matches!(
            self,
            Self::BlockStar
                | Self::TextStar
                | Self::InlineStar
                | Self::SubheadingItemStar
                | Self::ListItemStar
                | Self::ParagraphStar
                | Self::BodyGroupStar
                | Self::PhotoGalleryItemStar
                | Self::Empty
        )
    }
}

impl ArticleContentMatch {
    /// Whether some node type could be the next child in both states.
    pub(crate) fn compatible(self, other: Self) -> bool {
        ArticleNodeType::ALL
            .iter()
            .any(|&t| self.match_type(t).is_some() && other.match_type(t).is_some())
    }
}
