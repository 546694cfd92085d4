use std::io;

use bigsum::OFFSET_RANGE;

// Same loop as the default binary, started far above zero.
fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    bigsum::run(OFFSET_RANGE, &mut stdout.lock())?;
    Ok(())
}
