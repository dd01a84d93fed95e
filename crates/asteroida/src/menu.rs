//! Two-item main menu

/// Selectable menu entries, top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Start a new run
    #[default]
    NewGame,
    /// Close the game
    Exit,
}

impl MenuOption {
    /// Every option in display order
    pub const ALL: [Self; 2] = [Self::NewGame, Self::Exit];

    /// Text shown for the option
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewGame => "NEW GAME",
            Self::Exit => "EXIT",
        }
    }
}

/// Vertical selector. Moving past either end clamps instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    selected: MenuOption,
}

impl Menu {
    /// Menu with `NEW GAME` selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted option
    pub const fn selected(&self) -> MenuOption {
        self.selected
    }

    /// Move the highlight up
    pub fn up(&mut self) {
        self.selected = MenuOption::NewGame;
    }

    /// Move the highlight down
    pub fn down(&mut self) {
        self.selected = MenuOption::Exit;
    }
}
