use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::combo::{ComboKeyResult, HitTarget};
use crate::error::AppResult;
use crate::ui;

use super::core::App;
use super::terminal_session::{TerminalSession, TerminalSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopOutcome {
    Continue { redraw: bool },
    Quit,
}

impl App {
    /// Blocking event loop: draw, wait for one input event, apply it, repeat.
    /// Every handler runs to completion before the next event is read.
    pub fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let result = self.run_loop(&mut session);
        let restore = session.restore();
        result?;
        restore?;
        Ok(())
    }

    fn run_loop(&mut self, session: &mut TerminalSession) -> AppResult<()> {
        let mut redraw = true;
        loop {
            if redraw {
                self.draw(session)?;
                redraw = false;
            }

            match self.apply_event(crossterm::event::read()?) {
                LoopOutcome::Quit => return Ok(()),
                LoopOutcome::Continue { redraw: wanted } => redraw = wanted,
            }
        }
    }

    pub(crate) fn apply_event(&mut self, event: Event) -> LoopOutcome {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(_, _) => LoopOutcome::Continue { redraw: true },
            _ => LoopOutcome::Continue { redraw: false },
        }
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> LoopOutcome {
        let result = self.combo.handle_key(key);
        self.absorb(result)
    }

    pub(crate) fn on_mouse(&mut self, mouse: MouseEvent) -> LoopOutcome {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return LoopOutcome::Continue { redraw: false };
        }
        let target = match &self.last_layout {
            Some(layout) => ui::hit_test(layout, mouse.column, mouse.row),
            None => HitTarget::Outside,
        };
        let result = self.combo.handle_mouse_target(target);
        self.absorb(result)
    }

    fn absorb(&mut self, result: ComboKeyResult) -> LoopOutcome {
        match result {
            ComboKeyResult::QuitRequested => LoopOutcome::Quit,
            ComboKeyResult::Consumed { redraw, event } => {
                if let Some(event) = event {
                    self.state.note_selection(event);
                }
                LoopOutcome::Continue { redraw }
            }
        }
    }

    fn draw(&mut self, surface: &mut impl TerminalSurface) -> AppResult<()> {
        surface.draw(|frame| self.render(frame))?;
        Ok(())
    }

    /// Render one frame and remember its geometry for mouse hit-testing.
    pub(crate) fn render(&mut self, frame: &mut Frame<'_>) {
        let areas = ui::split_frame(frame.area());
        ui::draw_chrome(
            frame,
            &areas,
            &self.state,
            self.combo.selection().len(),
            &self.theme,
        );

        let view = self.combo.view(&self.config.ui.placeholder);
        self.last_layout = ui::compute_combo_layout(
            areas.body,
            &view,
            &self.theme,
            self.config.ui.max_dropdown_rows,
        );
        match &self.last_layout {
            Some(layout) => ui::draw_combo(frame, layout, &view, &self.theme),
            None => {
                frame.render_widget(
                    Paragraph::new("terminal too small").style(self.theme.no_results),
                    areas.body,
                );
            }
        }
    }
}
