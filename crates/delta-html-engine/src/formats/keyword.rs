use std::fmt;
use std::str::FromStr;

/// The keywords the built-in table knows about.
///
/// Declaration order is the resolution precedence: formats resolve in this
/// order, so later block tags override earlier ones and earlier inline tags
/// nest outside later ones when they open together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    Text,
    Image,
    Blockquote,
    Header,
    List,
    Align,
    Link,
    Color,
    Underline,
    Italic,
    Bold,
}

impl Keyword {
    pub const ALL: [Keyword; 11] = [
        Keyword::Text,
        Keyword::Image,
        Keyword::Blockquote,
        Keyword::Header,
        Keyword::List,
        Keyword::Align,
        Keyword::Link,
        Keyword::Color,
        Keyword::Underline,
        Keyword::Italic,
        Keyword::Bold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Text => "text",
            Keyword::Image => "image",
            Keyword::Blockquote => "blockquote",
            Keyword::Header => "header",
            Keyword::List => "list",
            Keyword::Align => "align",
            Keyword::Link => "link",
            Keyword::Color => "color",
            Keyword::Underline => "underline",
            Keyword::Italic => "italic",
            Keyword::Bold => "bold",
        }
    }

    /// Position in the resolution order. Keywords unknown to the built-in
    /// table sort after every built-in.
    pub fn rank(name: &str) -> usize {
        name.parse::<Keyword>()
            .map(|k| k as usize)
            .unwrap_or(Self::ALL.len())
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
