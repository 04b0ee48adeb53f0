/// スコア配点（合計100点）
///
/// Factor weights for the aggregate match score. Factors are always
/// evaluated in the fixed order skills → location → work mode → salary →
/// experience; the weights only control how many points each contributes.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 40.0,
    location: 20.0,
    work_mode: 15.0,
    salary: 15.0,
    experience: 10.0,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub location: f64,
    pub work_mode: f64,
    pub salary: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.work_mode + self.salary + self.experience
    }
}
