/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time     : Tue 13 Oct 2026 07:25:33 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The Record Management component defines the student record, how its
 * grades are calculated, how it is laid out in bytes, and how the
 * records of a SlotManager are saved to and loaded from a data file.
 *
 * Every record has the same size, so the data file needs no index:
 * record i starts at byte i * RECORD_SIZE.
 */

pub mod grade;
pub mod record_codec;
pub mod record_file_manager;
pub mod student;
