use std::io::Write;

use anyhow::Context;
use tessel_engine::{Bitmap, Color, DisplaySink, Palette};

/// Prints frames with half-block glyphs, two pixel rows per text line.
///
/// Stands in for a panel on the host: it only looks at which bits are set,
/// the way a monochrome controller would.
pub struct TerminalSink<W: Write> {
    out: W,
    invert: bool,
    bits: Palette,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, invert: false, bits: Palette::mono(Color::BLACK, Color::WHITE) }
    }

    /// Swaps lit and unlit pixels, like a panel's invert-display command.
    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn lit(&self, frame: &Bitmap, x: i32, y: i32) -> bool {
        match frame.get_pixel(&self.bits, x, y) {
            Some(c) => (c == Color::WHITE) != self.invert,
            None => false,
        }
    }
}

fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn push_frame(&mut self, frame: &Bitmap) -> anyhow::Result<()> {
        let edge = "─".repeat(frame.width().max(0) as usize);
        let mut text = format!("┌{edge}┐\n");
        for y in (0..frame.height()).step_by(2) {
            text.push('│');
            for x in 0..frame.width() {
                text.push(glyph(self.lit(frame, x, y), self.lit(frame, x, y + 1)));
            }
            text.push_str("│\n");
        }
        text.push_str(&format!("└{edge}┘\n"));

        self.out.write_all(text.as_bytes()).context("writing frame to terminal")?;
        self.out.flush().context("flushing terminal")?;
        Ok(())
    }
}
