use serde::{Deserialize, Serialize};

/// One entry on the wheel: a display title, the link it points at, and
/// whether the entry is currently hidden from the wheel.
///
/// Ordering of items is significant: it defines both the wheel segment
/// order and the line order when the list round-trips through text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Item {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            hidden: false,
        }
    }

    /// The text-buffer line for this item: `title<TAB>url` when both are
    /// present, otherwise whichever of the two is non-empty.
    pub fn buffer_line(&self) -> Option<String> {
        if !self.title.is_empty() && !self.url.is_empty() {
            Some(format!("{}\t{}", self.title, self.url))
        } else if !self.url.is_empty() {
            Some(self.url.clone())
        } else if !self.title.is_empty() {
            Some(self.title.clone())
        } else {
            None
        }
    }
}

/// Items eligible for the wheel, in list order.
pub fn visible(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|it| !it.hidden).collect()
}
