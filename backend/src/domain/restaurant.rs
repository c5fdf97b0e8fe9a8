//! Restaurant listing model and the fixed category enumeration.

use std::fmt;
use std::str::FromStr;

/// Fixed restaurant categories. The stored and wire form is the Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 한식
    Korean,
    /// 중식
    Chinese,
    /// 일식
    Japanese,
    /// 양식
    Western,
    /// 분식
    Snack,
    /// 구이
    Grill,
    /// 회/초밥
    SashimiSushi,
    /// 기타
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 8] = [
        Self::Korean,
        Self::Chinese,
        Self::Japanese,
        Self::Western,
        Self::Snack,
        Self::Grill,
        Self::SashimiSushi,
        Self::Other,
    ];

    /// Stored and wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Korean => "한식",
            Self::Chinese => "중식",
            Self::Japanese => "일식",
            Self::Western => "양식",
            Self::Snack => "분식",
            Self::Grill => "구이",
            Self::SashimiSushi => "회/초밥",
            Self::Other => "기타",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a label is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Active restaurant as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Category label as stored.
    pub category: String,
    /// Media reference for the review video.
    pub video_url: String,
}
