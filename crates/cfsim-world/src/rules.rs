use cfsim_dynamics::BodyKind;

/// Begin-of-contact behaviour for a pair of collision classes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PairRule {
    /// Logged as a collision event, elastic response.
    BallBall,
    /// Ball against a wall or an actuator: elastic response, not logged.
    BallSolid,
    /// Actuator reaching its sensor, a wall or another actuator: hard stop.
    ActuatorStop,
    /// Never interacts (sensors with balls, walls with walls, ...).
    Ignore,
}

impl PairRule {
    pub fn classify(a: BodyKind, b: BodyKind) -> Self {
        use BodyKind::*;
        match (a, b) {
            (Dynamic, Dynamic) => PairRule::BallBall,
            (Dynamic, Static | Kinematic) | (Static | Kinematic, Dynamic) => PairRule::BallSolid,
            (Kinematic, Sensor | Static | Kinematic) | (Sensor | Static, Kinematic) => PairRule::ActuatorStop,
            _ => PairRule::Ignore,
        }
    }

    #[inline] pub fn responds(self) -> bool { matches!(self, PairRule::BallBall | PairRule::BallSolid) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BodyKind::*;

    #[test] fn symmetric() {
        let kinds = [Static, Dynamic, Kinematic, Sensor];
        for a in kinds { for b in kinds { assert_eq!(PairRule::classify(a, b), PairRule::classify(b, a)); } }
    }

    #[test] fn sensors_only_stop_actuators() {
        assert_eq!(PairRule::classify(Dynamic, Sensor), PairRule::Ignore);
        assert_eq!(PairRule::classify(Sensor, Kinematic), PairRule::ActuatorStop);
        assert_eq!(PairRule::classify(Static, Static), PairRule::Ignore);
        assert_eq!(PairRule::classify(Kinematic, Kinematic), PairRule::ActuatorStop);
    }
}
