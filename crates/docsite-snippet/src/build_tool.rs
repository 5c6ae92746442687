//! Dependency declaration flavors.

use std::fmt;
use std::str::FromStr;

use crate::SnippetError;

/// Build tool whose declaration syntax a snippet uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuildTool {
    /// `"group" %% "artifact" % "version"`
    #[default]
    Sbt,
    /// `ivy"group::artifact:version"`
    Mill,
    /// `//> using dep group::artifact:version`
    ScalaCli,
}

impl BuildTool {
    /// Every supported flavor.
    pub const ALL: [Self; 3] = [Self::Sbt, Self::Mill, Self::ScalaCli];

    /// Canonical name as accepted on the command line and in directives.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sbt => "sbt",
            Self::Mill => "mill",
            Self::ScalaCli => "scala-cli",
        }
    }

    /// Language tag handed to the code block highlighter.
    #[must_use]
    pub fn language(self) -> &'static str {
        match self {
            Self::Sbt | Self::Mill | Self::ScalaCli => "scala",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sbt" => Ok(Self::Sbt),
            "mill" => Ok(Self::Mill),
            "scala-cli" | "scalacli" => Ok(Self::ScalaCli),
            _ => Err(SnippetError::UnknownBuildTool {
                name: s.to_owned(),
                supported: Self::ALL
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
