//! Stdin prompt helpers.
//!
//! Every prompt shows its default in brackets; empty input (or EOF)
//! accepts the default, unparseable numeric input re-prompts.

use std::io::{self, BufRead, Write};

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Free-text prompt, e.g. for the formula itself.
pub fn prompt_text(label: &str, default: &str) -> io::Result<String> {
    let line = read_line(&format!("{label} [{default}]"))?;
    if line.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(line)
    }
}

pub fn prompt_f64(label: &str, default: f64) -> io::Result<f64> {
    loop {
        let line = read_line(&format!("{label} [{default}]"))?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("not a number: `{line}`"),
        }
    }
}

pub fn prompt_usize(label: &str, default: usize) -> io::Result<usize> {
    loop {
        let line = read_line(&format!("{label} [{default}]"))?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("not a positive integer: `{line}`"),
        }
    }
}
