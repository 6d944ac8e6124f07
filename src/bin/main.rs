#![warn(rust_2018_idioms)]

use anyhow::Result;

fn main() -> Result<()> {
    hoststats::start_hoststats()
}
