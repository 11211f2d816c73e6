//! The fishing rods in the game and their stats.

/// Stats for one rod model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodStats {
    pub name: &'static str,
    /// How far the line can be let out, in meters.
    pub max_line_length: f32,
    /// Multiplier on reel crank force.
    pub reel_speed: f32,
    pub price: u32,
}

pub const BASIC_ROD: RodStats = RodStats {
    name: "Wooden Rod",
    max_line_length: 10.0,
    reel_speed: 1.0,
    price: 0,
};

pub const QUALITY_ROD: RodStats = RodStats {
    name: "Quality Rod",
    max_line_length: 15.0,
    reel_speed: 1.5,
    price: 150,
};

pub const MASTER_ROD: RodStats = RodStats {
    name: "Master Rod",
    max_line_length: 20.0,
    reel_speed: 2.0,
    price: 250,
};

/// Every rod currently in the game, cheapest first.
pub fn all_rods() -> [RodStats; 3] {
    [BASIC_ROD, QUALITY_ROD, MASTER_ROD]
}
