/**********************************************
  > File Name		: record_file_manager.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Thu 15 Oct 2026 09:48:43 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use super::record_codec::{self, RECORD_SIZE};
use super::student::StudentRecord;
use crate::errors::RecordFileError;
use crate::memory_management::slot_manager::SlotManager;

pub const DATA_FILE: &str = "students.dat";

/*
 * RecordFileManager saves the allocated records into a flat data file
 * and loads them back.
 *
 * The file is just the encoded records one after another, in slot
 * order. No header, no record count: the number of records is the
 * file length divided by RECORD_SIZE.
 */
#[derive(Debug, Clone)]
pub struct RecordFileManager {
    path: PathBuf,
}

impl RecordFileManager {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    //returns the number of records written. The file is truncated first.
    pub fn save(&self, sm: &SlotManager) -> Result<usize, RecordFileError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        let mut count = 0;
        for (_, record) in sm.list_occupied() {
            writer.write_all(&record_codec::encode(record))?;
            count += 1;
        }
        writer.flush()?;
        info!("Saved {} records to {}", count, self.path.display());
        Ok(count)
    }

    /*
     * Load every record of the file into the first free slots of sm.
     * Records already in sm are kept. The id of a loaded record is
     * the one stored in the file, whatever slot it lands in.
     *
     * The whole file is decoded before the first slot is taken, so
     * a failed load leaves sm untouched.
     */
    pub fn load(&self, sm: &mut SlotManager) -> Result<usize, RecordFileError> {
        let records = self.read_records()?;
        if records.len() > sm.num_free() {
            error!(
                "{} holds {} records, only {} free slots",
                self.path.display(),
                records.len(),
                sm.num_free()
            );
            return Err(RecordFileError::InsufficientSlots {
                needed: records.len(),
                available: sm.num_free(),
            });
        }
        for record in records.iter() {
            let (_, slot) = sm.allocate()?;
            *slot = *record;
        }
        info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records.len())
    }

    fn read_records(&self) -> Result<Vec<StudentRecord>, RecordFileError> {
        let data = match fs::read(&self.path) {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RecordFileError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        data.chunks(RECORD_SIZE)
            .enumerate()
            .map(|(chunk, bytes)| {
                record_codec::decode(bytes).map_err(|source| {
                    error!("Record {} of {} is malformed: {}", chunk, self.path.display(), source);
                    RecordFileError::Malformed { chunk, source }
                })
            })
            .collect()
    }
}
