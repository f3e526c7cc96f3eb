pub const DEFAULT_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Enter,
    Space,
}

impl Key {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "up" | "arrowup" => Some(Self::Up),
            "down" | "arrowdown" => Some(Self::Down),
            "left" | "arrowleft" => Some(Self::Left),
            "right" | "arrowright" => Some(Self::Right),
            "esc" | "escape" => Some(Self::Escape),
            "enter" => Some(Self::Enter),
            "space" => Some(Self::Space),
            _ => None,
        }
    }

    /// Keys that press a focused filter control.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Next focused card in a grid of `len` cards laid out `columns` wide.
/// `None` when the key does not move focus or the grid is empty.
pub fn move_focus(current: usize, len: usize, key: Key, columns: usize) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    let last = len - 1;
    let step = columns.max(1);
    match key {
        Key::Down => Some((current + step).min(last)),
        Key::Up => Some(current.saturating_sub(step)),
        Key::Right => Some((current + 1).min(last)),
        Key::Left => Some(current.saturating_sub(1)),
        Key::Escape | Key::Enter | Key::Space => None,
    }
}

/// Card to focus after "load more": the first one that was not shown before.
pub fn first_revealed(shown_before: usize, shown_after: usize) -> Option<usize> {
    (shown_before < shown_after).then_some(shown_before)
}
