//! Stream command implementation
//!
//! Writes raw generator words to stdout for external test batteries
//! (dieharder, TestU01, PractRand). Binary output is little-endian at the
//! generator's native width.

use std::io::{self, BufWriter, Write};

use forge_core::rng::Random;
use forge_core::traits::Generator;
use forge_core::types::Word;
use tracing::info;

use crate::config::ForgeConfig;
use crate::generator::{dispatch, GeneratorTask};
use crate::Result;

/// Run the stream command
pub fn run(config: &ForgeConfig, count: Option<u64>, text: bool) -> Result<()> {
    info!(generator = %config.generator, ?count, text, "streaming");
    let out = BufWriter::new(io::stdout().lock());
    match dispatch(config.generator, config.seed, StreamTask { out, count, text }) {
        // Downstream readers close the pipe once they have enough data.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(Into::into),
    }
}

/// Writes `count` words (or until the sink fails) to `out`.
pub struct StreamTask<W> {
    pub out: W,
    pub count: Option<u64>,
    pub text: bool,
}

impl<W: Write> GeneratorTask for StreamTask<W> {
    type Output = io::Result<()>;

    fn run<G: Generator>(mut self, mut rng: Random<G>) -> io::Result<()> {
        let width = (<G::Output as Word>::BITS / 8) as usize;
        let mut written = 0u64;
        while self.count.map_or(true, |n| written < n) {
            let word = rng.next().as_u64();
            if self.text {
                writeln!(self.out, "{}", word)?;
            } else {
                self.out.write_all(&word.to_le_bytes()[..width])?;
            }
            written += 1;
        }
        self.out.flush()
    }
}
