/**********************************************
  > File Name		: shell.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 16 Oct 2026 02:14:51 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * The interactive shell of the grade machine.
 *
 * It reads one command per line, runs it to completion and writes the
 * result to its output before reading the next one. Every error is
 * printed as an [ERROR] line, none of them ends the loop.
 */

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, error};
use rand::Rng;

use crate::errors::{CommandError, RecordFileError};
use crate::memory_management::slot_manager::SlotManager;
use crate::memory_management::NUM_STUDENTS;
use crate::record_management::grade::{round_to_cents, NUM_CATEGORIES};
use crate::record_management::record_file_manager::{RecordFileManager, DATA_FILE};
use crate::record_management::student::StudentRecord;

const PROMPT: &str = "grade-machine> ";
const HELP: &str = "
Commands:
  malloc     - Allocate a new student (random data)
  free N     - Free student at slot N
  show       - Show all allocated students
  save       - Save all students to binary file
  load       - Load students from binary file
  exit       - Exit the program
";

//range of the randomly generated scores.
const MIN_SCORE: f64 = 60.0;
const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Malloc,
    Free(usize),
    Show,
    Save,
    Load,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_lowercase();
        if line.starts_with("free") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            return match parts.as_slice() {
                ["free", n] if n.bytes().all(|b| b.is_ascii_digit()) => n
                    .parse()
                    .map(Command::Free)
                    .map_err(|_| CommandError::Usage("free N")),
                _ => Err(CommandError::Usage("free N")),
            };
        }
        match line.as_str() {
            "help" => Ok(Command::Help),
            "malloc" => Ok(Command::Malloc),
            "show" => Ok(Command::Show),
            "save" => Ok(Command::Save),
            "load" => Ok(Command::Load),
            "exit" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub capacity: usize,
    pub data_file: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            capacity: NUM_STUDENTS,
            data_file: PathBuf::from(DATA_FILE),
        }
    }
}

pub struct Shell<R> {
    slots: SlotManager,
    files: RecordFileManager,
    rng: R,
}

/*
 * A random student for slot index: named after the slot, scores
 * uniform in [60, 100] with two decimals, not graded yet.
 */
pub fn create_random_student<R: Rng>(index: usize, rng: &mut R) -> StudentRecord {
    let mut scores = [0f32; NUM_CATEGORIES];
    for score in scores.iter_mut() {
        *score = round_to_cents(rng.gen_range(MIN_SCORE..=MAX_SCORE)) as f32;
    }
    StudentRecord::new(index as i32, &format!("Student_{}", index), scores)
}

impl<R: Rng> Shell<R> {
    pub fn new(config: ShellConfig, rng: R) -> Self {
        Self {
            slots: SlotManager::new(config.capacity),
            files: RecordFileManager::new(config.data_file),
            rng,
        }
    }

    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    /*
     * Read commands from input until exit or end of input.
     */
    pub fn run<B: BufRead, W: Write>(&mut self, mut input: B, out: &mut W) -> io::Result<()> {
        writeln!(out, "Welcome to the GradeMachine 9000™ (Rust Edition)")?;
        writeln!(out, "Type 'help' for commands.")?;
        let mut line = Vec::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                debug!("End of input");
                self.execute(Command::Exit, out)?;
                return Ok(());
            }
            //a line that is not utf-8 is just an unknown command.
            let flow = match String::from_utf8_lossy(&line).parse::<Command>() {
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => {
                    writeln!(out, "[ERROR] {}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        debug!("Executing {:?}", cmd);
        match cmd {
            Command::Help => write!(out, "{}", HELP)?,
            Command::Malloc => self.malloc(out)?,
            Command::Free(slot) => match self.slots.free(slot) {
                Ok(true) => writeln!(out, "[INFO] Freed memory slot {}", slot)?,
                Ok(false) => writeln!(out, "[WARN] Slot {} already free", slot)?,
                Err(e) => writeln!(out, "[ERROR] {}", e)?,
            },
            Command::Show => {
                for (slot, record) in self.slots.list_occupied() {
                    writeln!(out, "\n[Memory Slot {}]", slot)?;
                    writeln!(out, "\n{}", record)?;
                }
            }
            Command::Save => match self.files.save(&self.slots) {
                Ok(n) => writeln!(out, "[INFO] Saved {} students to {}", n, self.files.path().display())?,
                Err(e) => {
                    error!("Save failed: {}", e);
                    writeln!(out, "[ERROR] {}", e)?;
                }
            },
            Command::Load => match self.files.load(&mut self.slots) {
                Ok(n) => writeln!(out, "[INFO] Loaded {} students from file.", n)?,
                Err(RecordFileError::NotFound(_)) => writeln!(out, "[ERROR] No file to load.")?,
                Err(e) => writeln!(out, "[ERROR] {}", e)?,
            },
            Command::Exit => {
                writeln!(out, "Exiting GradeMachine 9000. Goodbye.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn malloc<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let rng = &mut self.rng;
        match self.slots.allocate() {
            Ok((slot, record)) => {
                *record = create_random_student(slot, rng);
                record.calculate_final_grade();
                writeln!(out, "\n{}", record)
            }
            Err(e) => writeln!(out, "[ERROR] {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CommandError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn shell(capacity: usize, data_file: PathBuf) -> Shell<StdRng> {
        let config = ShellConfig { capacity, data_file };
        Shell::new(config, StdRng::seed_from_u64(9000))
    }

    fn run(sh: &mut Shell<StdRng>, script: &str) -> String {
        let mut out = Vec::new();
        sh.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("  MALLOC \n".parse::<Command>(), Ok(Command::Malloc));
        assert_eq!("free 12".parse::<Command>(), Ok(Command::Free(12)));
        assert_eq!("Free   3".parse::<Command>(), Ok(Command::Free(3)));
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("save".parse::<Command>(), Ok(Command::Save));
        assert_eq!("load".parse::<Command>(), Ok(Command::Load));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn parse_bad_free() {
        for line in ["free", "free -1", "free x", "free 1 2", "freedom"].iter() {
            assert_eq!(line.parse::<Command>(), Err(CommandError::Usage("free N")), "{}", line);
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "Fly away".parse::<Command>(),
            Err(CommandError::Unknown("fly away".to_string()))
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn random_students_are_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for i in 0..50 {
            let s = create_random_student(i, &mut rng);
            assert_eq!(s.id, i as i32);
            assert_eq!(s.name.text(), format!("Student_{}", i));
            assert_eq!(s.letter_grade.text(), "--");
            assert!(s.scores.iter().all(|&x| (60.0..=100.0).contains(&x)));
        }
    }

    #[test]
    fn malloc_prints_report_card() {
        let dir = tempdir().unwrap();
        let mut sh = shell(4, dir.path().join("students.dat"));
        let out = run(&mut sh, "malloc\nexit\n");
        assert!(out.contains("=== Report Card for Student_0 ==="));
        assert!(out.contains("Letter Grade: "));
        assert!(out.ends_with("Exiting GradeMachine 9000. Goodbye.\n"));

        let record = sh.slots().get(0).unwrap();
        assert!(record.final_grade >= 60.0);
        assert_ne!(record.letter_grade.text(), "--");
    }

    #[test]
    fn malloc_out_of_memory_keeps_running() {
        let dir = tempdir().unwrap();
        let mut sh = shell(2, dir.path().join("students.dat"));
        let out = run(&mut sh, "malloc\nmalloc\nmalloc\nshow\n");
        assert!(out.contains("[ERROR] No more memory available!"));
        assert!(out.contains("[Memory Slot 1]"));
        assert_eq!(sh.slots().num_allocated(), 2);
    }

    #[test]
    fn free_messages() {
        let dir = tempdir().unwrap();
        let mut sh = shell(4, dir.path().join("students.dat"));
        let out = run(&mut sh, "malloc\nfree 0\nfree 0\nfree 9\nfree\nexit\n");
        assert!(out.contains("[INFO] Freed memory slot 0"));
        assert!(out.contains("[WARN] Slot 0 already free"));
        assert!(out.contains("[ERROR] slot 9 out of range (capacity 4)"));
        assert!(out.contains("[ERROR] Usage: free N"));
        assert_eq!(sh.slots().num_allocated(), 0);
    }

    #[test]
    fn save_and_load_through_commands() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.dat");
        let mut sh = shell(10, path.clone());
        let out = run(&mut sh, "load\nmalloc\nmalloc\nmalloc\nfree 1\nsave\nexit\n");
        assert!(out.contains("[ERROR] No file to load."));
        assert!(out.contains("[INFO] Saved 2 students to"));

        let mut fresh = shell(10, path);
        let out = run(&mut fresh, "load\nshow\n");
        assert!(out.contains("[INFO] Loaded 2 students from file."));
        assert!(out.contains("[Memory Slot 0]"));
        assert!(out.contains("[Memory Slot 1]"));
        assert!(out.contains("Report Card for Student_2"));

        let before: Vec<_> = sh.slots().list_occupied().map(|(_, r)| *r).collect();
        let after: Vec<_> = fresh.slots().list_occupied().map(|(_, r)| *r).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn invalid_utf8_line_keeps_running() {
        let dir = tempdir().unwrap();
        let mut sh = shell(2, dir.path().join("students.dat"));
        let mut out = Vec::new();
        sh.run(&b"\xff\nmalloc\nexit\n"[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("[ERROR] Unknown command. Type 'help'."));
        assert!(out.contains("Report Card for Student_0"));
        assert_eq!(sh.slots().num_allocated(), 1);
    }

    #[test]
    fn unknown_command_and_help() {
        let dir = tempdir().unwrap();
        let mut sh = shell(1, dir.path().join("students.dat"));
        let out = run(&mut sh, "dance\nhelp\nexit\nmalloc\n");
        assert!(out.contains("[ERROR] Unknown command. Type 'help'."));
        assert!(out.contains("free N     - Free student at slot N"));
        //nothing after exit runs.
        assert_eq!(sh.slots().num_allocated(), 0);
    }
}
