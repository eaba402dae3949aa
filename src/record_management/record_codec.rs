/**********************************************
  > File Name		: record_codec.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Wed 14 Oct 2026 08:47:19 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Fixed-width binary layout of a student record.
 *
 * Every record takes exactly RECORD_SIZE bytes, fields are written
 * at explicit offsets, little endian, with no alignment padding:
 *
 * id(4) | name(50) | scores(4x4) | final_grade(4) | letter_grade(3)
 *
 * We don't copy the in-memory struct as it is, the compiler is free to
 * reorder and pad it. Offsets are fixed here instead.
 */

use super::grade::NUM_CATEGORIES;
use super::student::{StudentRecord, LETTER_GRADE_LENGTH, MAX_NAME_LENGTH};
use crate::errors::RecordError;
use crate::utils::FixedText;

pub const ID_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = ID_OFFSET + 4;
pub const SCORES_OFFSET: usize = NAME_OFFSET + MAX_NAME_LENGTH;
pub const FINAL_GRADE_OFFSET: usize = SCORES_OFFSET + 4 * NUM_CATEGORIES;
pub const LETTER_GRADE_OFFSET: usize = FINAL_GRADE_OFFSET + 4;
pub const RECORD_SIZE: usize = LETTER_GRADE_OFFSET + LETTER_GRADE_LENGTH;

pub fn encode(record: &StudentRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    buf[ID_OFFSET..NAME_OFFSET].copy_from_slice(&record.id.to_le_bytes());
    buf[NAME_OFFSET..SCORES_OFFSET].copy_from_slice(record.name.as_bytes());
    for (i, score) in record.scores.iter().enumerate() {
        let offset = SCORES_OFFSET + 4 * i;
        buf[offset..offset + 4].copy_from_slice(&score.to_le_bytes());
    }
    buf[FINAL_GRADE_OFFSET..LETTER_GRADE_OFFSET].copy_from_slice(&record.final_grade.to_le_bytes());
    buf[LETTER_GRADE_OFFSET..RECORD_SIZE].copy_from_slice(record.letter_grade.as_bytes());
    buf
}

pub fn decode(buf: &[u8]) -> Result<StudentRecord, RecordError> {
    if buf.len() != RECORD_SIZE {
        return Err(RecordError::Malformed {
            expected: RECORD_SIZE,
            actual: buf.len(),
        });
    }

    let mut scores = [0f32; NUM_CATEGORIES];
    for (i, score) in scores.iter_mut().enumerate() {
        *score = f32::from_le_bytes(read_array(buf, SCORES_OFFSET + 4 * i));
    }

    Ok(StudentRecord {
        id: i32::from_le_bytes(read_array(buf, ID_OFFSET)),
        name: FixedText::from_bytes(read_array(buf, NAME_OFFSET)),
        scores,
        final_grade: f32::from_le_bytes(read_array(buf, FINAL_GRADE_OFFSET)),
        letter_grade: FixedText::from_bytes(read_array(buf, LETTER_GRADE_OFFSET)),
    })
}

//the caller has checked the length of buf.
fn read_array<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut arr = [0u8; N];
    arr.copy_from_slice(&buf[offset..offset + N]);
    arr
}
