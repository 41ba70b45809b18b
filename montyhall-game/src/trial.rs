//! A single round of the game.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::door::Door;
use crate::host::HostPolicy;

/// Everything that happened in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub car: Door,
    pub guess: Door,
    pub revealed: Door,
    pub switch_target: Door,
}

impl TrialRecord {
    /// Resolve a trial from its three draws.
    #[must_use]
    pub fn resolve(car: Door, guess: Door, revealed: Door) -> Self {
        Self {
            car,
            guess,
            revealed,
            switch_target: switch_target(guess, revealed),
        }
    }

    #[must_use]
    pub fn switch_wins(&self) -> bool {
        self.switch_target == self.car
    }

    #[must_use]
    pub fn stay_wins(&self) -> bool {
        self.guess == self.car
    }

    /// The host opened the contestant's own door (uninformed host only).
    #[must_use]
    pub fn host_opened_guess(&self) -> bool {
        self.revealed == self.guess
    }
}

/// The door a switching contestant moves to.
///
/// When `guess` and `revealed` coincide two doors remain closed; the lower
/// index is taken.
#[must_use]
pub fn switch_target(guess: Door, revealed: Door) -> Door {
    if guess == revealed {
        guess.others()[0]
    } else {
        // Indices 0 + 1 + 2 sum to 3.
        Door::ALL[usize::from(3 - guess.index() - revealed.index())]
    }
}

/// Play one trial: place the car, take a guess, let the host open a goat door.
pub fn simulate_trial<R: Rng + ?Sized>(policy: HostPolicy, rng: &mut R) -> TrialRecord {
    let car = Door::random(rng);
    let guess = Door::random(rng);
    let revealed = policy.reveal(rng, car, guess);
    TrialRecord::resolve(car, guess, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(index: u8) -> Door {
        Door::new(index).unwrap()
    }

    #[test]
    fn switch_target_is_the_third_door() {
        assert_eq!(switch_target(door(0), door(1)), door(2));
        assert_eq!(switch_target(door(2), door(0)), door(1));
        assert_eq!(switch_target(door(1), door(2)), door(0));
    }

    #[test]
    fn coincident_guess_and_reveal_takes_lowest_remaining() {
        assert_eq!(switch_target(door(0), door(0)), door(1));
        assert_eq!(switch_target(door(1), door(1)), door(0));
        assert_eq!(switch_target(door(2), door(2)), door(0));
    }

    #[test]
    fn car_zero_guess_one_switching_wins() {
        let record = TrialRecord::resolve(door(0), door(1), door(2));
        assert_eq!(record.switch_target, door(0));
        assert!(record.switch_wins());
        assert!(!record.stay_wins());
        assert!(!record.host_opened_guess());
    }

    #[test]
    fn staying_wins_when_guess_is_car() {
        let record = TrialRecord::resolve(door(2), door(2), door(0));
        assert!(record.stay_wins());
        assert!(!record.switch_wins());
    }
}
