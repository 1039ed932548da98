use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// What the observer is assumed to know about the actuator when imagining the cause away.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Saw the whole clip: knows whether the gate moved, unsure only of exact timing.
    Counterfactual,
    /// Did not see the gate: unsure whether and when it moves.
    Hypothetical,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Hypothetical, Condition::Counterfactual];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Counterfactual => "counterfactual",
            Condition::Hypothetical => "hypothetical",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Condition {
    type Err = NoiseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counterfactual" => Ok(Condition::Counterfactual),
            "hypothetical" => Ok(Condition::Hypothetical),
            other => Err(NoiseError::UnknownCondition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn parses_known_tags() {
        for c in Condition::ALL { assert_eq!(c.as_str().parse::<Condition>(), Ok(c)); }
    }

    #[test] fn rejects_unknown_tag() {
        assert_eq!("Counterfactual".parse::<Condition>(), Err(NoiseError::UnknownCondition("Counterfactual".into())));
    }
}
