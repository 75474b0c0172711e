//! Version command implementation

use crate::error::Result;

pub fn run() -> Result<()> {
    println!("ebstage {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
