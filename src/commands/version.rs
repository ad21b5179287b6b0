use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ohmygpu version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
