use std::io;

use bigsum::SMALL_RANGE;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    bigsum::run(SMALL_RANGE, &mut stdout.lock())?;
    Ok(())
}
