use std::fmt;

use phf::phf_map;

use crate::rule::{Fallback, LengthPolicy, Rule};

/// A CSS property the converter knows how to validate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    BackgroundAttachment,
    BackgroundColor,
    BackgroundImage,
    BackgroundRepeat,
    BorderBottomWidth,
    BorderColor,
    BorderLeftWidth,
    BorderRightWidth,
    BorderTopWidth,
    BorderWidth,
    Clear,
    Color,
    Display,
    Float,
    FontStyle,
    FontVariant,
    Height,
    LetterSpacing,
    LineHeight,
    ListStyleImage,
    ListStylePosition,
    ListStyleType,
    MarginBottom,
    MarginLeft,
    MarginRight,
    MarginTop,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    TextAlign,
    TextIndent,
    TextTransform,
    VerticalAlign,
    WhiteSpace,
    Width,
    WordSpacing,
}

static PROPERTIES_BY_NAME: phf::Map<&'static str, Property> = phf_map! {
    "background-attachment" => Property::BackgroundAttachment,
    "background-color" => Property::BackgroundColor,
    "background-image" => Property::BackgroundImage,
    "background-repeat" => Property::BackgroundRepeat,
    "border-bottom-width" => Property::BorderBottomWidth,
    "border-color" => Property::BorderColor,
    "border-left-width" => Property::BorderLeftWidth,
    "border-right-width" => Property::BorderRightWidth,
    "border-top-width" => Property::BorderTopWidth,
    "border-width" => Property::BorderWidth,
    "clear" => Property::Clear,
    "color" => Property::Color,
    "display" => Property::Display,
    "float" => Property::Float,
    "font-style" => Property::FontStyle,
    "font-variant" => Property::FontVariant,
    "height" => Property::Height,
    "letter-spacing" => Property::LetterSpacing,
    "line-height" => Property::LineHeight,
    "list-style-image" => Property::ListStyleImage,
    "list-style-position" => Property::ListStylePosition,
    "list-style-type" => Property::ListStyleType,
    "margin-bottom" => Property::MarginBottom,
    "margin-left" => Property::MarginLeft,
    "margin-right" => Property::MarginRight,
    "margin-top" => Property::MarginTop,
    "padding-bottom" => Property::PaddingBottom,
    "padding-left" => Property::PaddingLeft,
    "padding-right" => Property::PaddingRight,
    "padding-top" => Property::PaddingTop,
    "text-align" => Property::TextAlign,
    "text-indent" => Property::TextIndent,
    "text-transform" => Property::TextTransform,
    "vertical-align" => Property::VerticalAlign,
    "white-space" => Property::WhiteSpace,
    "width" => Property::Width,
    "word-spacing" => Property::WordSpacing,
};

const BORDER_WIDTH: LengthPolicy = LengthPolicy {
    negative: false,
    percent: false,
    keywords: &["thin", "medium", "thick"],
};

const SIZE: LengthPolicy = LengthPolicy {
    negative: false,
    percent: true,
    keywords: &["auto"],
};

const SPACING: LengthPolicy = LengthPolicy {
    negative: true,
    percent: false,
    keywords: &["normal"],
};

const MARGIN: LengthPolicy = LengthPolicy {
    negative: true,
    percent: true,
    keywords: &["auto"],
};

const PADDING: LengthPolicy = LengthPolicy {
    negative: false,
    percent: true,
    keywords: &[],
};

impl Property {
    pub const ALL: [Property; 37] = [
        Property::BackgroundAttachment,
        Property::BackgroundColor,
        Property::BackgroundImage,
        Property::BackgroundRepeat,
        Property::BorderBottomWidth,
        Property::BorderColor,
        Property::BorderLeftWidth,
        Property::BorderRightWidth,
        Property::BorderTopWidth,
        Property::BorderWidth,
        Property::Clear,
        Property::Color,
        Property::Display,
        Property::Float,
        Property::FontStyle,
        Property::FontVariant,
        Property::Height,
        Property::LetterSpacing,
        Property::LineHeight,
        Property::ListStyleImage,
        Property::ListStylePosition,
        Property::ListStyleType,
        Property::MarginBottom,
        Property::MarginLeft,
        Property::MarginRight,
        Property::MarginTop,
        Property::PaddingBottom,
        Property::PaddingLeft,
        Property::PaddingRight,
        Property::PaddingTop,
        Property::TextAlign,
        Property::TextIndent,
        Property::TextTransform,
        Property::VerticalAlign,
        Property::WhiteSpace,
        Property::Width,
        Property::WordSpacing,
    ];

    /// Look up a property by its CSS name. Property names are ASCII
    /// case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        PROPERTIES_BY_NAME
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// The canonical, lowercase CSS name
    pub fn name(self) -> &'static str {
        match self {
            Property::BackgroundAttachment => "background-attachment",
            Property::BackgroundColor => "background-color",
            Property::BackgroundImage => "background-image",
            Property::BackgroundRepeat => "background-repeat",
            Property::BorderBottomWidth => "border-bottom-width",
            Property::BorderColor => "border-color",
            Property::BorderLeftWidth => "border-left-width",
            Property::BorderRightWidth => "border-right-width",
            Property::BorderTopWidth => "border-top-width",
            Property::BorderWidth => "border-width",
            Property::Clear => "clear",
            Property::Color => "color",
            Property::Display => "display",
            Property::Float => "float",
            Property::FontStyle => "font-style",
            Property::FontVariant => "font-variant",
            Property::Height => "height",
            Property::LetterSpacing => "letter-spacing",
            Property::LineHeight => "line-height",
            Property::ListStyleImage => "list-style-image",
            Property::ListStylePosition => "list-style-position",
            Property::ListStyleType => "list-style-type",
            Property::MarginBottom => "margin-bottom",
            Property::MarginLeft => "margin-left",
            Property::MarginRight => "margin-right",
            Property::MarginTop => "margin-top",
            Property::PaddingBottom => "padding-bottom",
            Property::PaddingLeft => "padding-left",
            Property::PaddingRight => "padding-right",
            Property::PaddingTop => "padding-top",
            Property::TextAlign => "text-align",
            Property::TextIndent => "text-indent",
            Property::TextTransform => "text-transform",
            Property::VerticalAlign => "vertical-align",
            Property::WhiteSpace => "white-space",
            Property::Width => "width",
            Property::WordSpacing => "word-spacing",
        }
    }

    pub(crate) fn rule(self) -> Rule {
        match self {
            Property::BackgroundAttachment => Rule::Keyword(&["scroll", "fixed"]),
            Property::BackgroundRepeat => {
                Rule::Keyword(&["repeat", "repeat-x", "repeat-y", "no-repeat"])
            }
            Property::Clear => Rule::Keyword(&["none", "left", "right", "both"]),
            Property::Display => Rule::Keyword(&["inline", "block", "list-item", "none"]),
            Property::Float => Rule::Keyword(&["left", "right", "none"]),
            Property::FontStyle => Rule::Keyword(&["normal", "italic", "oblique"]),
            Property::FontVariant => Rule::Keyword(&["normal", "small-caps"]),
            Property::ListStylePosition => Rule::Keyword(&["inside", "outside"]),
            Property::ListStyleType => Rule::Keyword(&[
                "disc",
                "circle",
                "square",
                "decimal",
                "lower-roman",
                "upper-roman",
                "lower-alpha",
                "upper-alpha",
                "none",
            ]),
            Property::TextAlign => Rule::Keyword(&["left", "right", "center", "justify"]),
            Property::TextTransform => {
                Rule::Keyword(&["none", "capitalize", "uppercase", "lowercase"])
            }
            Property::VerticalAlign => Rule::Keyword(&[
                "baseline",
                "middle",
                "sub",
                "super",
                "text-top",
                "text-bottom",
                "top",
                "bottom",
            ]),
            Property::WhiteSpace => Rule::Keyword(&["normal", "pre", "nowrap"]),

            Property::BorderWidth
            | Property::BorderTopWidth
            | Property::BorderRightWidth
            | Property::BorderBottomWidth
            | Property::BorderLeftWidth => Rule::Length(BORDER_WIDTH),
            Property::Width | Property::Height => Rule::Length(SIZE),
            Property::LineHeight => Rule::Length(LengthPolicy {
                negative: false,
                percent: true,
                keywords: &["normal"],
            }),
            Property::TextIndent => Rule::Length(LengthPolicy {
                negative: true,
                percent: true,
                keywords: &[],
            }),
            Property::LetterSpacing | Property::WordSpacing => Rule::Length(SPACING),
            Property::MarginTop
            | Property::MarginRight
            | Property::MarginBottom
            | Property::MarginLeft => Rule::Length(MARGIN),
            Property::PaddingTop
            | Property::PaddingRight
            | Property::PaddingBottom
            | Property::PaddingLeft => Rule::Length(PADDING),

            Property::BorderColor | Property::Color | Property::BackgroundColor => Rule::Colors,

            Property::BackgroundImage | Property::ListStyleImage => Rule::UrlOrNone,
        }
    }

    /// What lenient mode stores when a value fails validation. Most
    /// properties keep the raw text; a few substitute a fixed default.
    pub(crate) fn lenient_fallback(self) -> Fallback {
        match self {
            Property::ListStyleType => Fallback::Default("disc"),
            Property::BorderWidth
            | Property::BorderTopWidth
            | Property::BorderRightWidth
            | Property::BorderBottomWidth
            | Property::BorderLeftWidth => Fallback::Default("medium"),
            _ => Fallback::Raw,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
