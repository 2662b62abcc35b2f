//! `portmarks render <url>` – print the portmark HTML to stdout.

use anyhow::Result;
use portmarks_core::{Portmark, PortmarkError};

pub fn run_render(url: &str) -> Result<()> {
    let portmark = Portmark::new(url).map_err(PortmarkError::from)?;
    println!("{}", portmark.html());
    Ok(())
}
