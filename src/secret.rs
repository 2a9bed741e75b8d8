use std::io::{self, Write};

use crate::utils;

/// Where the secret comes from when hiding.
pub enum Secret {
    FromConsole,
    FromFile(String),
}

impl Secret {
    pub fn read(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        match self {
            Secret::FromConsole => {
                print!("Enter your secret: ");
                io::stdout().flush()?;

                let mut line = String::new();
                io::stdin().read_line(&mut line)?;

                // The line terminator belongs to the console, not the secret
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }

                Ok(line.into_bytes())
            }
            Secret::FromFile(path) => utils::read_file_bytes(path),
        }
    }
}
