//! Graph-Typ-Enum mit String-Parsing für das Host-Interface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Die fünf unterstützten Graph-Typen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    /// Gerade durch zwei Punkte
    Linear,
    /// Gerade plus Halbebenen-Ungleichung
    LinearInequality,
    /// Parabel in Scheitelpunktform (Scheitel + ein Punkt)
    Quadratic,
    /// Exponentialfunktion mit fester Asymptote y=0
    Exponential,
    /// Freie Punktwolke ohne Kurve
    ScatterPoints,
}

impl GraphKind {
    /// Host-seitiger Typ-Name (identisch zur serde-Repräsentation).
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Linear => "linear",
            GraphKind::LinearInequality => "linear-inequality",
            GraphKind::Quadratic => "quadratic",
            GraphKind::Exponential => "exponential",
            GraphKind::ScatterPoints => "scatter-points",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(GraphKind::Linear),
            "linear-inequality" => Ok(GraphKind::LinearInequality),
            "quadratic" => Ok(GraphKind::Quadratic),
            "exponential" => Ok(GraphKind::Exponential),
            "scatter-points" => Ok(GraphKind::ScatterPoints),
            other => Err(GraphError::UnknownGraphType(other.to_string())),
        }
    }
}
