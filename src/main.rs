//! Interactive password checker.
//!
//! With an argument, scores it once; without, prompts for passwords until
//! a blank line or end of input.

use std::io::{self, BufRead, Write};

use secrecy::SecretString;

use pwd_meter::{estimate_entropy, init_wordlist, render, score_password};

#[cfg(feature = "breach")]
use pwd_meter::{BreachStatus, check_breach};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = init_wordlist() {
        eprintln!("Warning: wordlist unavailable ({e}); using builtin table");
    }

    if let Some(pwd) = std::env::args().nth(1) {
        check(&pwd, true);
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter password to test (blank to exit): ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => {
                let pwd = line.trim();
                if pwd.is_empty() {
                    println!("Exiting...");
                    break;
                }
                check(pwd, false);
            }
            Some(Err(_)) | None => {
                println!();
                break;
            }
        }
    }
}

fn check(pwd: &str, echo: bool) {
    let password = SecretString::new(pwd.to_string().into());

    let result = score_password(&password);
    print!("{}", render(&result, echo.then_some(pwd)));
    println!("Entropy: {} bits", estimate_entropy(&password));

    #[cfg(feature = "breach")]
    match check_breach(&password) {
        Ok(BreachStatus::Found(count)) => {
            println!("Breach status: seen {count} times in known breaches!");
        }
        Ok(BreachStatus::NotFound) => {
            println!("Breach status: not found in known breaches.");
        }
        Err(e) => println!("Breach status: check failed ({e})"),
    }

    println!("{}", "-".repeat(40));
}
