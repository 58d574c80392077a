//! Tools, each with its own name for "do the thing".

/// Swings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hammer;

impl Hammer {
    pub fn swing(&self) -> String {
        "using hammer".to_string()
    }
}

/// Screws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Screwdriver;

impl Screwdriver {
    pub fn screw(&self) -> String {
        "using screwdriver".to_string()
    }
}

/// Drills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drill;

impl Drill {
    pub fn drill(&self) -> String {
        "using drill".to_string()
    }
}
