//! Published artifacts.

use std::fmt;
use std::str::FromStr;

use crate::SnippetError;

/// Group id shared by all published artifacts.
const GROUP_ID: &str = "org.business4s";

/// A published library artifact that documentation can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    /// `chatops4s-core`
    Core,
    /// `chatops4s-slack`
    Slack,
}

impl ModuleId {
    /// Every supported module, in documentation order.
    pub const ALL: [Self; 2] = [Self::Core, Self::Slack];

    /// Artifact id as published.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "chatops4s-core",
            Self::Slack => "chatops4s-slack",
        }
    }

    /// Maven group id of the artifact.
    #[must_use]
    pub fn group_id(self) -> &'static str {
        GROUP_ID
    }

    /// Short description, used as a trailing comment in dependency lists.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Core => "Core functionality",
            Self::Slack => "Slack integration",
        }
    }

    pub(crate) fn supported() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = SnippetError;

    /// Artifact ids are matched exactly; `Chatops4s-Slack` is not a module.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SnippetError::UnknownModule {
                id: s.to_owned(),
                supported: Self::supported(),
            })
    }
}
