use crate::StepHasher;

/// Stages of one physics step, recorded in execution order and folded into the state hash.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepStage {
    Integrate = 1,
    UpdateAabbs = 2,
    BroadphaseSap = 3,
    Narrowphase = 4,
    Dispatch = 5,
    Solve = 6,
}

pub fn schedule_digest(stages: &[StepStage]) -> [u8; 32] {
    let mut h = StepHasher::new();
    for s in stages { h.update_bytes(&[*s as u8]); }
    h.finalize()
}
