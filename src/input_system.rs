use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

/// Actions a prompt screen reacts to
///
/// Everything else SDL delivers (mouse, focus, other keys) is dropped
/// during translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// ENTER was pressed
    Confirm,
    /// The window was closed
    Close,
}

/// InputSystem turns raw SDL events into ScreenActions
///
/// Only ENTER and window-close mean anything to a prompt screen, so there
/// is no context switching: the same mapping holds for menu and ending.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Translate a single SDL event
    pub fn translate(&self, event: &Event) -> Option<ScreenAction> {
        match event {
            Event::Quit { .. } => Some(ScreenAction::Close),
            Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => Some(ScreenAction::Close),
            Event::KeyDown {
                keycode: Some(Keycode::Return),
                ..
            } => Some(ScreenAction::Confirm),
            _ => {
                log::trace!("Ignoring event {:?}", event);
                None
            }
        }
    }

    /// Drain every pending SDL event and return the actions among them
    ///
    /// Order is preserved so a close that follows ENTER in the same batch
    /// is still seen after it.
    pub fn poll_actions(&self, event_pump: &mut EventPump) -> Vec<ScreenAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    pub(crate) fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    pub(crate) fn quit() -> Event {
        Event::Quit { timestamp: 0 }
    }

    #[test]
    fn test_enter_confirms() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Return)), Some(ScreenAction::Confirm));
    }

    #[test]
    fn test_quit_and_window_close_both_close() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&quit()), Some(ScreenAction::Close));

        let window_close = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Close,
        };
        assert_eq!(input.translate(&window_close), Some(ScreenAction::Close));
    }

    #[test]
    fn test_other_keys_ignored() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Space)), None);
        assert_eq!(input.translate(&key_down(Keycode::Escape)), None);
        assert_eq!(input.translate(&key_down(Keycode::KpEnter)), None);
    }

    #[test]
    fn test_key_up_ignored() {
        let input = InputSystem::new();
        let key_up = Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Return),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(input.translate(&key_up), None);
    }

    #[test]
    fn test_key_without_keycode_ignored() {
        let input = InputSystem::new();
        let unknown = Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: None,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(input.translate(&unknown), None);
    }
}
