/**********************************************
  > File Name		: errors.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Oct 2026 10:05:17 AM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Define some erros enum for global usage.
 * None of them is fatal, the shell prints them and keeps going.
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("No more memory available!")]
    OutOfMemory { capacity: usize }, //all slots are occupied.
    #[error("slot {slot} out of range (capacity {capacity})")]
    OutOfRange { slot: usize, capacity: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed record: expected {expected} bytes, got {actual}")]
    Malformed { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum RecordFileError {
    #[error("no data file at {}", .0.display())]
    NotFound(PathBuf),
    #[error("record {chunk} of the data file is malformed")]
    Malformed {
        chunk: usize,
        #[source]
        source: RecordError,
    },
    //returns when the file holds more records than the free slots can take.
    #[error("data file holds {needed} records but only {available} slots are free")]
    InsufficientSlots { needed: usize, available: usize },
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("data file I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown command. Type 'help'.")]
    Unknown(String),
}
