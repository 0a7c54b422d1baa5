//! Frame-counter animation phases.

/// Periodic phases driving the A1 source-rect animation.
///
/// `water` cycles 0,1,2,1 over four frames (the flowing-water columns sway
/// back and forth), `fall` cycles 0,1,2 (waterfall rows scroll one way).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimPhase {
    /// Horizontal phase for flowing-water kinds.
    pub water: u8,
    /// Vertical phase for waterfall kinds.
    pub fall: u8,
}

impl AnimPhase {
    /// Reduce a monotonic frame counter into the two phases.
    pub fn at(frame: u64) -> AnimPhase {
        const WATER: [u8; 4] = [0, 1, 2, 1];
        AnimPhase {
            water: WATER[(frame % 4) as usize],
            fall: (frame % 3) as u8,
        }
    }
}
