//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one; only changed runs of cells
//! are re-emitted. A size change (or [`TerminalRenderer::invalidate`]) forces
//! a full repaint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};
use log::debug;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    out: io::Stdout,
    previous: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call on an error path.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        queue!(
            self.scratch,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full repaint
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Present a frame and remember it for the next diff
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        match &self.previous {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(prev, frame, &mut self.scratch)?;
            }
            _ => {
                debug!("full repaint at {}x{}", frame.width(), frame.height());
                encode_full_into(frame, &mut self.scratch)?;
            }
        }
        self.flush()?;

        match &mut self.previous {
            Some(prev) => prev.clone_from(frame),
            None => self.previous = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks the style last sent so runs with the same style skip the escapes
struct StyleCursor {
    current: Option<CellStyle>,
}

impl StyleCursor {
    fn new() -> Self {
        Self { current: None }
    }

    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            self.current = Some(cell.style);
        }
        queue!(out, Print(cell.ch))?;
        Ok(())
    }
}

/// Encode a full repaint into `out` without touching stdout
pub fn encode_full_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleCursor::new();
    for y in 0..frame.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        for &cell in frame.row(y) {
            style.print(out, cell)?;
        }
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells that differ from `prev` into `out`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleCursor::new();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }
        for (start, end) in changed_runs(old, new) {
            queue!(out, cursor::MoveTo(start as u16, y))?;
            for &cell in &new[start..end] {
                style.print(out, cell)?;
            }
        }
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open index ranges where two rows differ
fn changed_runs(old: &[Cell], new: &[Cell]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, (a, b)) in old.iter().zip(new).enumerate() {
        match (a == b, start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, new.len()));
    }
    runs
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(rgb_to_color(style.fg)),
        SetBackgroundColor(rgb_to_color(style.bg))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_unchanged_cells() {
        let style = CellStyle::default();
        let old = FrameBuffer::new(6, 1);
        let mut new = old.clone();
        new.put_str(1, 0, "ab", style);
        new.put_char(5, 0, 'z', style);

        assert_eq!(changed_runs(old.row(0), new.row(0)), vec![(1, 3), (5, 6)]);
    }

    #[test]
    fn identical_frames_encode_only_reset() {
        let mut frame = FrameBuffer::new(4, 2);
        frame.put_str(0, 0, "wall", CellStyle::default());

        let mut diff = Vec::new();
        encode_diff_into(&frame, &frame, &mut diff).unwrap();

        let mut reset_only = Vec::new();
        queue!(reset_only, ResetColor, SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(diff, reset_only);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut frame = FrameBuffer::new(3, 1);
        frame.put_str(0, 0, "-|?", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&frame, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("-|?"));
    }
}
