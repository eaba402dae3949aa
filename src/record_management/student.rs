/**********************************************
  > File Name		: student.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Tue 13 Oct 2026 10:31:02 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::fmt;

use super::grade::{self, CATEGORIES, NUM_CATEGORIES};
use crate::utils::FixedText;

pub const MAX_NAME_LENGTH: usize = 50;
pub const LETTER_GRADE_LENGTH: usize = 3;

//placeholder letter until the grade is calculated.
const UNGRADED: &str = "--";

/*
 * A student record has a fixed set of fields of fixed width,
 * see record_codec for the on-disk layout.
 *
 * A default record is all zeros, that is what a freshly
 * allocated slot holds before its fields are filled.
 */
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct StudentRecord {
    pub id: i32,
    pub name: FixedText<MAX_NAME_LENGTH>,
    pub scores: [f32; NUM_CATEGORIES],
    pub final_grade: f32,
    pub letter_grade: FixedText<LETTER_GRADE_LENGTH>,
}

impl StudentRecord {
    pub fn new(id: i32, name: &str, scores: [f32; NUM_CATEGORIES]) -> Self {
        Self {
            id,
            name: FixedText::new(name),
            scores,
            final_grade: 0.0,
            letter_grade: FixedText::new(UNGRADED),
        }
    }

    //fill in final_grade and letter_grade from the scores.
    pub fn calculate_final_grade(&mut self) {
        self.final_grade = grade::calculate_final_grade(&self.scores);
        self.letter_grade = FixedText::new(grade::assign_letter_grade(self.final_grade));
    }
}

/*
 * Display prints the report card of the student.
 */
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Report Card for {} ===", self.name)?;
        for (category, score) in CATEGORIES.iter().zip(self.scores.iter()) {
            writeln!(f, "{}: {:.2}", category.name(), score)?;
        }
        writeln!(f, "Final Grade: {:.2}", self.final_grade)?;
        writeln!(f, "Letter Grade: {}", self.letter_grade)?;
        write!(f, "{}", "=".repeat(30))
    }
}
