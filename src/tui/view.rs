use crate::tui::state::RenderPlan;
use anyhow::{Context, Result, bail};
use crossterm::tty::IsTty;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::io::{Stdout, Write, stdout};

/// Output surface for the application. The terminal implementation owns the
/// real screen; tests substitute a capturing stub.
pub trait Screen {
    fn init(&mut self) -> Result<()>;
    fn size(&self) -> Result<(u16, u16)>;
    /// Draw one frame, fully replacing whatever was on screen before.
    fn draw(&mut self, plan: &RenderPlan) -> Result<()>;
    fn shutdown(&mut self) -> Result<()>;
}

pub struct TerminalScreen {
    stdout: Stdout,
    active: bool,
}

impl TerminalScreen {
    /// Resolve the output handle, failing fast when there is no terminal to
    /// draw on. Nothing is wired up until `init`.
    pub fn new() -> Result<Self> {
        let out = stdout();
        if !out.is_tty() {
            bail!("stdout is not a terminal");
        }
        Ok(Self {
            stdout: out,
            active: false,
        })
    }
}

impl Screen for TerminalScreen {
    fn init(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        execute!(self.stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .context("enter alternate screen")?;
        self.active = true;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("query terminal size")
    }

    fn draw(&mut self, plan: &RenderPlan) -> Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // Batch all rows into one write + flush to avoid flicker.
        let mut frame = String::new();
        for line in &plan.header_lines {
            frame.push_str(&format!("\r{line}\n"));
        }
        for line in &plan.card_lines {
            frame.push_str(&format!("\r{line}\n"));
        }
        frame.push_str(&format!("\r{}\n", plan.status_line));
        frame.push_str(&format!("\r{}", plan.input_line));
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)
            .context("leave alternate screen")?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        self.active = false;
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
