use std::ops::AddAssign;

/// Contact bookkeeping for one physics step, or summed over a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Pairs admitted by the broadphase.
    pub candidate_pairs: u32,
    /// Pairs the narrowphase found touching.
    pub touching: u32,
    /// Ball-ball contacts that began and were logged.
    pub collisions: u32,
    /// Actuator contacts that began and halted a kinematic body.
    pub actuator_stops: u32,
}

impl AddAssign for StepStats {
    fn add_assign(&mut self, rhs: Self) {
        self.candidate_pairs += rhs.candidate_pairs;
        self.touching += rhs.touching;
        self.collisions += rhs.collisions;
        self.actuator_stops += rhs.actuator_stops;
    }
}
