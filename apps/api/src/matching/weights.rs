use serde::{Deserialize, Serialize};

/// Weights of the three match dimensions. Each dimension scores 0–100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub location: f64,
    pub experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            location: 0.30,
            experience: 0.20,
        }
    }
}

impl MatchWeights {
    /// Weighted sum of per-dimension scores, clamped to 0–100.
    pub fn combine(&self, skills: f64, location: f64, experience: f64) -> f64 {
        (self.skills * skills + self.location * location + self.experience * experience)
            .clamp(0.0, 100.0)
    }
}
