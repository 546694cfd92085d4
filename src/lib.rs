pub mod accumulator;
pub mod range_sum;

use std::io::{self, Write};
use std::time::Instant;

pub use accumulator::BigAccumulator;
pub use range_sum::SumRange;

/// `1..=1234567890`
pub const SMALL_RANGE: SumRange = SumRange::new(1, 1_234_567_890);

const OFFSET_BEGIN: u64 = 444_333_222_111;
/// `444333222111..=444333222111 + 1234567890`
pub const OFFSET_RANGE: SumRange = SumRange::new(OFFSET_BEGIN, OFFSET_BEGIN + 1_234_567_890);

/// Sums `range` and writes the decimal total as a single line to `out`.
pub fn run<W: Write>(range: SumRange, out: &mut W) -> io::Result<BigAccumulator> {
    log::debug!(
        "summing {}..={} ({} terms)",
        range.begin,
        range.end,
        range.term_count()
    );

    let start = Instant::now();
    let acc = range.sum();
    log::info!("summation took {:?}", start.elapsed());

    if log::log_enabled!(log::Level::Debug) {
        let matches = acc.value() == &range.closed_form();
        log::debug!("closed form check: {}", if matches { "ok" } else { "MISMATCH" });
    }

    writeln!(out, "{}", acc.to_decimal_string())?;
    out.flush()?;
    Ok(acc)
}
