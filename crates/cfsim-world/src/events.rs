use serde::{Deserialize, Serialize};

/// Begin-of-contact between two balls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub objects: (String, String),
    pub step: u32,
}

/// Terminal classification of the target ball.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEvent {
    pub target: String,
    pub step: u32,
    /// 1 when the ball went through the gate.
    pub outcome: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub collisions: Vec<CollisionEvent>,
    pub outcome: Option<OutcomeEvent>,
}

impl EventLog {
    pub fn first_collision_step(&self) -> Option<u32> { self.collisions.first().map(|c| c.step) }
    pub fn outcome_bit(&self) -> Option<u8> { self.outcome.as_ref().map(|o| o.outcome) }

    /// Index of the first event whose step is smaller than its predecessor's.
    pub fn first_out_of_order(&self) -> Option<usize> {
        self.collisions.windows(2).position(|w| w[0].step > w[1].step).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(step: u32) -> CollisionEvent { CollisionEvent { objects: ("A".into(), "B".into()), step } }

    #[test] fn detects_disorder() {
        let mut log = EventLog { collisions: vec![ev(3), ev(3), ev(9)], outcome: None };
        assert_eq!(log.first_out_of_order(), None);
        log.collisions.push(ev(4));
        assert_eq!(log.first_out_of_order(), Some(3));
        assert_eq!(log.first_collision_step(), Some(3));
    }
}
