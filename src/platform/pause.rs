//! Pause menu seam
//!
//! The widget itself lives outside the simulation. While paused the session
//! calls `update` once per tick and then polls the three queries.

use std::collections::VecDeque;

/// A pause menu the session can drive
pub trait PauseMenu {
    /// Reset menu state when the game is paused
    fn init(&mut self);
    /// Advance the menu by one frame
    fn update(&mut self);
    fn should_resume(&self) -> bool;
    fn should_restart(&self) -> bool;
    fn should_exit_to_menu(&self) -> bool;
}

/// Menu that never selects anything; the game resumes only via the pause toggle
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPauseMenu;

impl PauseMenu for NullPauseMenu {
    fn init(&mut self) {}
    fn update(&mut self) {}
    fn should_resume(&self) -> bool {
        false
    }
    fn should_restart(&self) -> bool {
        false
    }
    fn should_exit_to_menu(&self) -> bool {
        false
    }
}

/// A pause menu button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseChoice {
    Resume,
    Restart,
    ExitToMenu,
}

/// Menu that replays queued choices, one per update (`None` = no click)
#[derive(Debug, Default)]
pub struct ScriptedPauseMenu {
    script: VecDeque<Option<PauseChoice>>,
    current: Option<PauseChoice>,
    inits: u32,
}

impl ScriptedPauseMenu {
    pub fn new(script: impl IntoIterator<Item = Option<PauseChoice>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            current: None,
            inits: 0,
        }
    }

    /// Queue another frame's choice
    pub fn push(&mut self, choice: Option<PauseChoice>) {
        self.script.push_back(choice);
    }

    /// How many times the menu was opened
    pub fn inits(&self) -> u32 {
        self.inits
    }
}

impl PauseMenu for ScriptedPauseMenu {
    fn init(&mut self) {
        self.current = None;
        self.inits += 1;
    }

    fn update(&mut self) {
        // Choices only hold for the frame they were made in
        self.current = self.script.pop_front().flatten();
    }

    fn should_resume(&self) -> bool {
        self.current == Some(PauseChoice::Resume)
    }

    fn should_restart(&self) -> bool {
        self.current == Some(PauseChoice::Restart)
    }

    fn should_exit_to_menu(&self) -> bool {
        self.current == Some(PauseChoice::ExitToMenu)
    }
}
