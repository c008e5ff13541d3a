/// High-level events with element targeting.
///
/// The embedding host owns input capture and hit testing; events arrive
/// here already resolved to a target element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    /// A left click on the element with the given ID.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
