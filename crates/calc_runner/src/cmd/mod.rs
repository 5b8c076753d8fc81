pub mod damage;
pub mod speed;

use std::fs::File;
use std::io::{self, BufReader, Read};

/// Read a request body from a file path, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> io::Result<String> {
    let mut body = String::new();
    match path {
        Some(path) => {
            BufReader::new(File::open(path)?).read_to_string(&mut body)?;
        }
        None => {
            io::stdin().read_to_string(&mut body)?;
        }
    }
    Ok(body)
}
