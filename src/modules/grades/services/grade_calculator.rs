use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::grades::models::{Grade, GradeComponents, GradeResult, Remarks};

/// Component weights in hundredths: quizzes, projects, participation, major exams
const WEIGHTS: [i64; 4] = [25, 25, 20, 30];

/// Lowest passing final numeric grade
pub const PASSING_SCORE: i64 = 70;

/// Breakpoints `(minimum final numeric, grade point in hundredths)`, highest first.
/// Anything below the last breakpoint maps to 0.00.
const GRADE_SCALE: [(i64, i64); 12] = [
    (97, 400),
    (95, 375),
    (92, 350),
    (89, 325),
    (86, 300),
    (83, 275),
    (80, 250),
    (78, 225),
    (76, 200),
    (74, 175),
    (72, 150),
    (70, 100),
];

/// Weighted grade computation and GWA aggregation
pub struct GradeCalculator;

impl GradeCalculator {
    /// Compute the final grade from the four component scores.
    ///
    /// Returns `None` when any component is missing; the grade then stays
    /// indeterminate instead of failing.
    pub fn grade_from_raw_scores(components: &GradeComponents) -> Option<GradeResult> {
        let final_numeric = Self::final_numeric(
            components.quizzes?,
            components.projects?,
            components.participation?,
            components.major_exams?,
        );

        Some(GradeResult {
            final_numeric,
            grade_point: Self::grade_point_for(final_numeric),
            remarks: Self::remarks_for(final_numeric),
        })
    }

    /// `0.25·quizzes + 0.25·projects + 0.20·participation + 0.30·major_exams`,
    /// rounded to 2 decimal places
    pub fn final_numeric(
        quizzes: Decimal,
        projects: Decimal,
        participation: Decimal,
        major_exams: Decimal,
    ) -> Decimal {
        let weighted: Decimal = [quizzes, projects, participation, major_exams]
            .iter()
            .zip(WEIGHTS)
            .map(|(score, weight)| *score * Decimal::new(weight, 2))
            .sum();

        round_2dp(weighted)
    }

    /// Map a final numeric grade onto the 4.00 scale
    pub fn grade_point_for(final_numeric: Decimal) -> Decimal {
        GRADE_SCALE
            .iter()
            .find(|(minimum, _)| final_numeric >= Decimal::from(*minimum))
            .map(|(_, point)| Decimal::new(*point, 2))
            .unwrap_or_else(|| Decimal::new(0, 2))
    }

    pub fn remarks_for(final_numeric: Decimal) -> Remarks {
        if final_numeric >= Decimal::from(PASSING_SCORE) {
            Remarks::Passed
        } else {
            Remarks::Failed
        }
    }

    /// Grade-weighted average: `Σ(grade_point · units) / Σ units`.
    ///
    /// Only submitted grades count. A stored grade point is used when the
    /// backend has one; otherwise it is computed from the components, and
    /// grades that cannot be computed are skipped. `None` when no units
    /// qualify.
    pub fn compute_gwa(grades: &[Grade]) -> Option<Decimal> {
        let mut weighted_sum = Decimal::ZERO;
        let mut total_units = Decimal::ZERO;

        for grade in grades.iter().filter(|g| g.is_submitted()) {
            if grade.units <= Decimal::ZERO {
                continue;
            }

            let grade_point = match grade.grade_point {
                Some(point) => point,
                None => match Self::grade_from_raw_scores(&grade.components()) {
                    Some(result) => result.grade_point,
                    None => continue,
                },
            };

            weighted_sum += grade_point * grade.units;
            total_units += grade.units;
        }

        if total_units.is_zero() {
            return None;
        }

        Some(round_2dp(weighted_sum / total_units))
    }
}

fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
