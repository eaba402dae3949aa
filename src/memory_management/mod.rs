/**********************************************
  > File Name		: mod.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Oct 2026 10:31:37 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The memory management component simulates malloc and free over a
 * fixed number of record slots.
 *
 * All records live in one preallocated table owned by the
 * SlotManager, a slot index is the handle to a record. There is no
 * free list: allocation scans the occupancy flags from slot 0 and
 * takes the first free one.
 */

pub mod slot_manager;

pub const NUM_STUDENTS: usize = 100;
