use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }

    fn matches(&self, i: &InputState) -> bool {
        i.key_pressed(self.key)
            && i.modifiers.command == self.command
            && i.modifiers.shift == self.shift
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false, false), action)
    }
}

const SHORTCUTS: [Shortcut; 5] = [
    Shortcut::command_shift(Key::R, Action::ResetProgress),
    Shortcut::plain(Key::Space, Action::TapBoard),
    Shortcut::plain(Key::Enter, Action::TapBoard),
    Shortcut::plain(Key::H, Action::ShowHint),
    Shortcut::plain(Key::N, Action::NewPuzzle),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is Ctrl on Windows/Linux and Cmd on Mac
    if let Some(shortcut) = SHORTCUTS.iter().find(|s| s.trigger.matches(i)) {
        action_queue.request(shortcut.action);
    }
}
