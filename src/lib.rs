/**********************************************
  > File Name		: lib.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Oct 2026 09:40:12 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * GradeMachine: a simulation of manual memory management over a fixed
 * table of student records, with weighted grades and a flat binary
 * data file.
 */

pub mod errors;
pub mod memory_management;
pub mod record_management;
pub mod shell;
pub mod utils;
