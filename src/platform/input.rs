//! Gesture mapping
//!
//! The game has exactly one input: "act". Several physical gestures map to
//! it and none carries extra meaning.

/// `KeyboardEvent.code` values that trigger the action
pub const ACTION_KEYS: [&str; 4] = ["Space", "ArrowUp", "KeyW", "Enter"];

/// Physical gestures the page listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture<'a> {
    Key { code: &'a str },
    /// `MouseEvent.button`
    MouseDown { button: i16 },
    TouchStart,
}

impl Gesture<'_> {
    /// Whether this gesture should be forwarded as a player input.
    ///
    /// Auto-repeat keydowns count too; the server decides what to ignore.
    pub fn is_action(self) -> bool {
        match self {
            Gesture::Key { code } => ACTION_KEYS.contains(&code),
            Gesture::MouseDown { button } => button == 0,
            Gesture::TouchStart => true,
        }
    }
}
