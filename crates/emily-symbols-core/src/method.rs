// Emily Symbols Attachment Method
// Selects what the A/O keys mean: where spaces go, or where output attaches

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Interpretation of the attachment keys
///
/// Under `Space` a symbol attaches on both sides unless `A`/`O` ask for a
/// space there. Under `Attachment` a symbol is spaced on both sides unless
/// `A`/`O` ask to attach there.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttachmentMethod {
    #[default]
    Space,
    Attachment,
}

impl AttachmentMethod {
    /// Whether a side attaches when its key is absent
    pub fn attaches_by_default(self) -> bool {
        self == AttachmentMethod::Space
    }

    /// Whether a side attaches, given whether its key is pressed
    pub fn attaches(self, key_present: bool) -> bool {
        self.attaches_by_default() ^ key_present
    }
}
