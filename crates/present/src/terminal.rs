//! 24-bit color terminal sink built on `crossterm` commands.
//!
//! Each frame is drawn from the top-left corner of the screen, one glyph per
//! pixel, colored with a truecolor foreground. A color command is only queued
//! when the color changes from the previous glyph on the same row, which keeps
//! smooth regions cheap to print.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use wave_field_core::color::{hsv_to_rgb, Rgb8};
use wave_field_core::error::FieldError;
use wave_field_core::frame::FrameBuffer;
use wave_field_core::sink::FrameConsumer;

/// Glyph printed for every pixel unless configured otherwise.
pub const DEFAULT_GLYPH: char = 'o';

/// Draws frames into any `io::Write`, typically stdout.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    glyph: char,
    frames: usize,
    buf: Vec<u8>,
}

impl TerminalSink<io::Stdout> {
    /// Sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            glyph: DEFAULT_GLYPH,
            frames: 0,
            buf: Vec::new(),
        }
    }

    /// Uses `glyph` for every pixel.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Queues the commands for one frame into `self.buf`.
    fn encode(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        let buf = &mut self.buf;
        buf.clear();
        if self.frames == 0 {
            queue!(buf, Clear(ClearType::All))?;
        }
        queue!(buf, MoveTo(0, 0))?;
        for row in frame.rows() {
            let mut current: Option<Rgb8> = None;
            for &px in row {
                let rgb = hsv_to_rgb(px);
                if current != Some(rgb) {
                    queue!(buf, SetForegroundColor(foreground(rgb)))?;
                    current = Some(rgb);
                }
                queue!(buf, Print(self.glyph))?;
            }
            queue!(buf, Print('\n'))?;
        }
        queue!(buf, ResetColor)
    }
}

fn foreground(rgb: Rgb8) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl<W: Write> FrameConsumer for TerminalSink<W> {
    fn accept(&mut self, frame: &FrameBuffer) -> Result<(), FieldError> {
        self.encode(frame)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::Command;
    use wave_field_core::color::Hsv;

    fn ansi(command: impl Command) -> String {
        let mut s = String::new();
        command.write_ansi(&mut s).unwrap();
        s
    }

    fn output(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    fn set_rgb(r: u8, g: u8, b: u8) -> String {
        ansi(SetForegroundColor(Color::Rgb { r, g, b }))
    }

    #[test]
    fn first_frame_clears_screen_then_homes_cursor() {
        let frame = FrameBuffer::filled(2, 1, Hsv::new(120, 255, 255)).unwrap();
        let mut sink = TerminalSink::new(Vec::new());
        sink.accept(&frame).unwrap();
        let text = output(sink);
        let prelude = ansi(Clear(ClearType::All)) + &ansi(MoveTo(0, 0));
        assert!(text.starts_with(&prelude), "got {text:?}");
        assert!(text.ends_with(&ansi(ResetColor)));
    }

    #[test]
    fn later_frames_only_home_cursor() {
        let frame = FrameBuffer::filled(1, 1, Hsv::new(0, 0, 0)).unwrap();
        let mut sink = TerminalSink::new(Vec::new());
        sink.accept(&frame).unwrap();
        sink.accept(&frame).unwrap();
        assert_eq!(sink.frames(), 2);
        let text = output(sink);
        assert_eq!(text.matches(&ansi(Clear(ClearType::All))).count(), 1);
        assert_eq!(text.matches(&ansi(MoveTo(0, 0))).count(), 2);
    }

    #[test]
    fn uniform_row_emits_one_color_command() {
        let frame = FrameBuffer::filled(5, 2, Hsv::new(120, 255, 255)).unwrap();
        let mut sink = TerminalSink::new(Vec::new()).with_glyph('#');
        sink.accept(&frame).unwrap();
        let text = output(sink);
        assert_eq!(text.matches(&set_rgb(0, 0, 255)).count(), 2);
        assert_eq!(text.matches("#####\n").count(), 2);
    }

    #[test]
    fn color_changes_emit_new_command() {
        let mut renderer = wave_field_core::WaveFieldRenderer::configure(
            wave_field_core::RenderConfig::new(8, 1, 4, Hsv::new(120, 255, 255)),
        )
        .unwrap();
        let frame = renderer.render_frame(1).unwrap();

        let mut runs: Vec<Rgb8> = frame.pixels().iter().map(|&p| hsv_to_rgb(p)).collect();
        runs.dedup();
        let expected: String = runs
            .iter()
            .map(|c| set_rgb(c.r, c.g, c.b))
            .collect::<Vec<_>>()
            .join("");

        let mut sink = TerminalSink::new(Vec::new());
        sink.accept(frame).unwrap();
        let text = output(sink);
        // Strip glyphs and framing so only the color commands remain, in order.
        let body = text
            .trim_start_matches(&ansi(Clear(ClearType::All)))
            .trim_start_matches(&ansi(MoveTo(0, 0)))
            .trim_end_matches(&ansi(ResetColor))
            .replace([DEFAULT_GLYPH, '\n'], "");
        assert_eq!(body, expected);
        assert_eq!(text.matches(DEFAULT_GLYPH).count(), 8);
    }

    #[test]
    fn write_failure_is_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let frame = FrameBuffer::filled(1, 1, Hsv::new(0, 0, 0)).unwrap();
        let mut sink = TerminalSink::new(Broken);
        assert!(matches!(sink.accept(&frame), Err(FieldError::Io(_))));
        assert_eq!(sink.frames(), 0);
    }
}
