/// Points by finishing position for a grand prix (1st through 10th)
pub const RACE_POINTS: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Points by finishing position for a sprint (1st through 8th)
pub const SPRINT_POINTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Extra point for fastest lap, grand prix only, top-10 finish required
pub const FASTEST_LAP_BONUS: u32 = 1;

/// Maximum points one driver can take from a grand prix (win + fastest lap).
/// The remaining-pool ceiling is 26 per grand prix, not 25: the bonus point
/// is drawn from the same pool as base points.
pub const RACE_MAX_POINTS: u32 = 26;

/// Maximum points one driver can take from a sprint
pub const SPRINT_MAX_POINTS: u32 = 8;
