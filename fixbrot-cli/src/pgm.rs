use std::io::{self, Write};

/// Plain-text (P2) grayscale raster writer.
///
/// The header goes out on construction; the body is fed one row at a
/// time. Each sample is followed by a single space and each row ends
/// with a newline — the exact byte layout the reference rasters use, so
/// outputs remain diffable against them.
pub struct PgmWriter<W: Write> {
    out: W,
    width: u32,
}

impl<W: Write> PgmWriter<W> {
    pub fn new(mut out: W, width: u32, height: u32, max_sample: u8) -> io::Result<Self> {
        writeln!(out, "P2")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "{}", max_sample)?;
        Ok(Self { out, width })
    }

    /// Write one row of samples followed by the row terminator.
    pub fn write_row(&mut self, samples: &[u8]) -> io::Result<()> {
        debug_assert_eq!(samples.len(), self.width as usize);
        for sample in samples {
            write!(self.out, "{} ", sample)?;
        }
        writeln!(self.out)
    }

    /// Flush the underlying stream, propagating any deferred error.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}
