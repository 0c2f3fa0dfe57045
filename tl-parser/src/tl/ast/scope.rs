use serde::{Deserialize, Serialize};
use std::fmt;

/// Section metadata carried by sentinel comments such as `// System messages`.
///
/// Exactly one scope is active at any scan position. It is parse-time only and
/// is not written back by the TL serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeTypeEnum {
    #[default]
    Empty,
    Handshake,
    Transport,
    Sync,
    CoreTypes,
}

impl ScopeTypeEnum {
    pub fn is_empty(&self) -> bool {
        matches!(self, ScopeTypeEnum::Empty)
    }
}

impl fmt::Display for ScopeTypeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScopeTypeEnum::Handshake => "handshake",
            ScopeTypeEnum::Transport => "transport",
            ScopeTypeEnum::Sync => "sync",
            ScopeTypeEnum::CoreTypes => "core_types",
            ScopeTypeEnum::Empty => "",
        })
    }
}
