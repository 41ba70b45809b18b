//! Host disclosure policies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::door::Door;

/// How the host picks the goat door to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostPolicy {
    /// Opens a goat door that is never the contestant's pick.
    RuleCompliant,
    /// Opens either goat door at random, even the contestant's own.
    Uninformed,
}

impl HostPolicy {
    pub const ALL: [Self; 2] = [Self::RuleCompliant, Self::Uninformed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RuleCompliant => "Rule-compliant host",
            Self::Uninformed => "Uninformed host",
        }
    }

    /// Domain tag used to derive this policy's RNG stream.
    #[must_use]
    pub const fn stream_tag(self) -> &'static [u8] {
        match self {
            Self::RuleCompliant => b"host-rule-compliant",
            Self::Uninformed => b"host-uninformed",
        }
    }

    /// Long-run probability that switching wins under this policy.
    #[must_use]
    pub const fn expected_switch_rate(self) -> f64 {
        match self {
            Self::RuleCompliant => 2.0 / 3.0,
            Self::Uninformed => 0.5,
        }
    }

    /// Pick the goat door the host opens.
    ///
    /// The rule-compliant host rejection-samples the goat doors until the
    /// candidate differs from `guess`. At least one goat is always distinct
    /// from the guess, so the loop terminates with probability one.
    pub fn reveal<R: Rng + ?Sized>(self, rng: &mut R, car: Door, guess: Door) -> Door {
        let goats = car.others();
        match self {
            Self::RuleCompliant => loop {
                let candidate = goats[rng.gen_range(0..goats.len())];
                if candidate != guess {
                    return candidate;
                }
            },
            Self::Uninformed => goats[rng.gen_range(0..goats.len())],
        }
    }
}

impl std::fmt::Display for HostPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
