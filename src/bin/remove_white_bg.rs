use anyhow::Result;
use spritewash::{batch, config};

fn main() -> Result<()> {
    if let Err(e) = batch::ensure_codec() {
        eprintln!("this build has no PNG support; rebuild with the `image/png` feature");
        return Err(e.into());
    }

    let base_dir = std::env::current_dir()?;
    batch::run(&base_dir, &config::transparency_jobs())?;

    Ok(())
}
