/**********************************************
  > File Name		: grade.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Tue 13 Oct 2026 09:12:40 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Grade calculation.
 *
 * The final grade is the weighted sum of the four category scores,
 * rounded to 2 decimal places. The letter grade is a step function
 * over the final grade, every band includes its lower bound.
 */

pub const NUM_CATEGORIES: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Homework,
    Quizzes,
    Midterm,
    Final,
}

pub const CATEGORIES: [Category; NUM_CATEGORIES] = [
    Category::Homework,
    Category::Quizzes,
    Category::Midterm,
    Category::Final,
];

pub const CATEGORY_WEIGHTS: [f64; NUM_CATEGORIES] = [0.20, 0.20, 0.25, 0.35];

//lower bound of each band, from the top down. Anything below is a fail.
const LETTER_BANDS: [(f32, &str); 12] = [
    (97.0, "A+"),
    (93.0, "A"),
    (90.0, "A-"),
    (87.0, "B+"),
    (83.0, "B"),
    (80.0, "B-"),
    (77.0, "C+"),
    (73.0, "C"),
    (70.0, "C-"),
    (67.0, "D+"),
    (63.0, "D"),
    (60.0, "D-"),
];

pub const FAILING_GRADE: &str = "F ";

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Homework => "Homework",
            Category::Quizzes => "Quizzes",
            Category::Midterm => "Midterm",
            Category::Final => "Final",
        }
    }

    pub fn weight(self) -> f64 {
        CATEGORY_WEIGHTS[self as usize]
    }
}

pub fn calculate_final_grade(scores: &[f32; NUM_CATEGORIES]) -> f32 {
    let total: f64 = CATEGORIES
        .iter()
        .zip(scores.iter())
        .map(|(c, &s)| s as f64 * c.weight())
        .sum();
    round_to_cents(total) as f32
}

pub fn assign_letter_grade(final_grade: f32) -> &'static str {
    LETTER_BANDS
        .iter()
        .find(|(lower, _)| final_grade >= *lower)
        .map(|(_, letter)| *letter)
        .unwrap_or(FAILING_GRADE)
}

/*
 * Round to 2 decimal places from the exact decimal expansion of value,
 * ties go to the even cent.
 */
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
