/// Fixed aggregation weights for the overall score. Skills dominate, then
/// experience, then education. Default behavior is pinned to these constants;
/// they are not configurable per call.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.5,
    experience: 0.3,
    education: 0.2,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education
    }

    /// Weighted combination of the three dimension scores.
    pub fn combine(&self, skill: f64, experience: f64, education: f64) -> f64 {
        skill * self.skills + experience * self.experience + education * self.education
    }
}
