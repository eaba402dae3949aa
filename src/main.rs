/**********************************************
  > File Name		: main.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Fri 16 Oct 2026 05:02:33 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

use std::io;

use grade_machine::shell::{Shell, ShellConfig};
use log::error;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ShellConfig::default(), rand::thread_rng());
    if let Err(e) = shell.run(stdin.lock(), &mut stdout.lock()) {
        error!("Shell I/O error: {}", e);
    }
}
