//! Console event lines. One line per event, keyword first
//! (DONE/DRYRUN/SKIP/WARN/ERROR); colors only when stdout is a TTY.
//! Consumers should key off the leading keyword, nothing stricter.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_done(msg: &str) {
    if is_tty() {
        println!("{} {}", "DONE".green().bold(), msg);
    } else {
        println!("DONE {}", msg);
    }
}

pub fn print_dryrun(msg: &str) {
    if is_tty() {
        println!("{} {}", "DRYRUN".blue().bold(), msg);
    } else {
        println!("DRYRUN {}", msg);
    }
}

pub fn print_skip(msg: &str) {
    if is_tty() {
        println!("{} {}", "SKIP".yellow().bold(), msg);
    } else {
        println!("SKIP {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "WARN".yellow().bold(), msg);
    } else {
        eprintln!("WARN {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "ERROR".red().bold(), msg);
    } else {
        eprintln!("ERROR {}", msg);
    }
}
