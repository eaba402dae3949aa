/**********************************************
  > File Name		: slot_manager.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Oct 2026 11:01:57 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use log::{debug, info, warn};

use crate::errors::SlotError;
use crate::record_management::student::StudentRecord;

/*
 * storage and allocated are parallel tables of the same length.
 * allocated[i] is true if and only if storage[i] holds a record.
 */
#[derive(Debug)]
pub struct SlotManager {
    storage: Vec<Option<StudentRecord>>,
    allocated: Vec<bool>,
}

impl SlotManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![None; capacity],
            allocated: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.allocated.len()
    }

    pub fn num_allocated(&self) -> usize {
        self.allocated.iter().filter(|&&used| used).count()
    }

    pub fn num_free(&self) -> usize {
        self.capacity() - self.num_allocated()
    }

    pub fn is_allocated(&self, slot: usize) -> bool {
        self.allocated.get(slot).copied().unwrap_or(false)
    }

    /*
     * Take the first free slot, put a zeroed record in it and
     * return the slot index with the record to fill.
     */
    pub fn allocate(&mut self) -> Result<(usize, &mut StudentRecord), SlotError> {
        let slot = match self.allocated.iter().position(|&used| !used) {
            Some(v) => v,
            None => {
                warn!("All {} slots are allocated", self.capacity());
                return Err(SlotError::OutOfMemory {
                    capacity: self.capacity(),
                });
            }
        };
        self.allocated[slot] = true;
        debug!("Allocated slot {}", slot);
        Ok((slot, self.storage[slot].insert(StudentRecord::default())))
    }

    /*
     * Free a slot and drop its record.
     * Freeing a free slot is tolerated: a warning is logged and
     * Ok(false) is returned. Ok(true) means the slot was freed.
     */
    pub fn free(&mut self, slot: usize) -> Result<bool, SlotError> {
        if slot >= self.capacity() {
            return Err(SlotError::OutOfRange {
                slot,
                capacity: self.capacity(),
            });
        }
        if !self.is_allocated(slot) {
            warn!("Slot {} already free", slot);
            return Ok(false);
        }
        self.allocated[slot] = false;
        self.storage[slot] = None;
        info!("Freed memory slot {}", slot);
        Ok(true)
    }

    pub fn get(&self, slot: usize) -> Option<&StudentRecord> {
        self.storage.get(slot).and_then(Option::as_ref)
    }

    //occupied slots with their records, in ascending slot order.
    pub fn list_occupied(&self) -> impl Iterator<Item = (usize, &StudentRecord)> + '_ {
        self.allocated
            .iter()
            .zip(self.storage.iter())
            .enumerate()
            .filter_map(|(slot, (&used, record))| match (used, record) {
                (true, Some(r)) => Some((slot, r)),
                _ => None,
            })
    }
}
