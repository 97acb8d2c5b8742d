//! Context scoring algorithm.
//!
//! This module maps a [`UserContext`] snapshot to a relevance score per
//! coaching category, considering time of day, energy level, stress level,
//! and environment. Higher score means that category of coaching is more
//! contextually appropriate right now.
//!
//! The algorithm is a single pass of independent additive adjustments onto a
//! per-category baseline, with a final clamp to `[0.0, 1.0]`. It is pure:
//! no I/O, no logging, no state between calls.

use serde::{Deserialize, Serialize};

use crate::context::{EnergyLevel, Location, NoiseLevel, StressLevel, UserContext};

/// Baseline score every category starts from before adjustments.
pub const BASELINE: f64 = 0.5;

/// Coaching category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productivity,
    Wellbeing,
    Focus,
    Motivation,
}

impl Category {
    /// All categories, in fixed order. The order doubles as the tie-break
    /// for [`CategoryScores::best`].
    pub const ALL: [Category; 4] = [
        Category::Productivity,
        Category::Wellbeing,
        Category::Focus,
        Category::Motivation,
    ];

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Productivity => "productivity",
            Category::Wellbeing => "wellbeing",
            Category::Focus => "focus",
            Category::Motivation => "motivation",
        }
    }
}

/// Relevance scores for all four coaching categories.
///
/// One field per category, so every output carries all four keys regardless
/// of input completeness. Serializes as the flat
/// `{"productivity": .., "wellbeing": .., "focus": .., "motivation": ..}` map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub productivity: f64,
    pub wellbeing: f64,
    pub focus: f64,
    pub motivation: f64,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::baseline()
    }
}

impl CategoryScores {
    /// All categories at the neutral baseline.
    pub fn baseline() -> Self {
        Self {
            productivity: BASELINE,
            wellbeing: BASELINE,
            focus: BASELINE,
            motivation: BASELINE,
        }
    }

    /// Score for a single category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Productivity => self.productivity,
            Category::Wellbeing => self.wellbeing,
            Category::Focus => self.focus,
            Category::Motivation => self.motivation,
        }
    }

    /// Highest-scoring category and its score. Ties resolve to the earlier
    /// category in [`Category::ALL`] order.
    pub fn best(&self) -> (Category, f64) {
        let mut best = Category::ALL[0];
        let mut best_score = self.get(best);
        for category in &Category::ALL[1..] {
            let score = self.get(*category);
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }
        (best, best_score)
    }

    /// Clamp every score into `[0.0, 1.0]`. Applied once, per category, as
    /// the final step of evaluation.
    fn clamp(&mut self) {
        self.productivity = self.productivity.clamp(0.0, 1.0);
        self.wellbeing = self.wellbeing.clamp(0.0, 1.0);
        self.focus = self.focus.clamp(0.0, 1.0);
        self.motivation = self.motivation.clamp(0.0, 1.0);
    }
}

/// Time-of-day adjustment.
///
/// Buckets are disjoint, first match wins:
/// - 9-12: morning productive hours, productivity +0.3
/// - 13-15: post-lunch focus dip, focus +0.4 and wellbeing +0.2
/// - 16-18: afternoon energy, motivation +0.3
/// - any other hour: no adjustment
fn apply_time_of_day(scores: &mut CategoryScores, hour: u32) {
    if (9..=12).contains(&hour) {
        scores.productivity += 0.3;
    } else if (13..=15).contains(&hour) {
        scores.focus += 0.4;
        scores.wellbeing += 0.2;
    } else if (16..=18).contains(&hour) {
        scores.motivation += 0.3;
    }
}

/// Energy-level adjustment.
///
/// - Low: wellbeing +0.4, productivity -0.2
/// - High: productivity +0.3, focus +0.2
/// - Medium or unrecognized: no adjustment
fn apply_energy(scores: &mut CategoryScores, energy: EnergyLevel) {
    match energy {
        EnergyLevel::Low => {
            scores.wellbeing += 0.4;
            scores.productivity -= 0.2;
        }
        EnergyLevel::High => {
            scores.productivity += 0.3;
            scores.focus += 0.2;
        }
        EnergyLevel::Medium | EnergyLevel::Other => {}
    }
}

/// Stress-level adjustment.
///
/// - High: wellbeing +0.5, focus -0.3
/// - Low, medium, or unrecognized: no adjustment
fn apply_stress(scores: &mut CategoryScores, stress: StressLevel) {
    if stress == StressLevel::High {
        scores.wellbeing += 0.5;
        scores.focus -= 0.3;
    }
}

/// Environment adjustments. Independent of state and of each other.
///
/// - Noise high: focus +0.3
/// - Location home: motivation +0.2
fn apply_environment(scores: &mut CategoryScores, noise: NoiseLevel, location: Location) {
    if noise == NoiseLevel::High {
        scores.focus += 0.3;
    }
    if location == Location::Home {
        scores.motivation += 0.2;
    }
}

/// Evaluate context relevance for all four coaching categories.
///
/// Every category starts at [`BASELINE`], the time/energy/stress/environment
/// adjustments accumulate additively (no factor interaction), and each score
/// is clamped to `[0.0, 1.0]` as the final step. Deterministic for a given
/// context; safe to call concurrently.
pub fn evaluate(context: &UserContext) -> CategoryScores {
    let mut scores = CategoryScores::baseline();

    apply_time_of_day(&mut scores, context.hour());
    apply_energy(&mut scores, context.state.energy);
    apply_stress(&mut scores, context.state.stress);
    apply_environment(&mut scores, context.environment.noise, context.environment.location);

    scores.clamp();
    scores
}
