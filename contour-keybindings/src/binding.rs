//! Input binding tables.
//!
//! Bindings are kept in insertion order, one list per input channel (named
//! keys, characters, mouse buttons). Resolution walks the list and returns
//! the actions of the first binding that matches, so earlier bindings take
//! precedence over later ones for the same input.

use crate::action::Action;
use crate::matcher::matches;
use crate::modes::{MatchModes, ModeFlags};
use crate::parser::{Key, Modifiers, MouseButton, Trigger};

/// A single rule: input plus context predicate mapped to one or more actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBinding<I> {
    /// Terminal modes required for this binding to apply.
    pub modes: MatchModes,
    /// Exact modifier set that must be held.
    pub modifiers: Modifiers,
    /// The key, character or mouse button that triggers the binding.
    pub input: I,
    /// Actions executed in order. Never empty once inserted.
    pub actions: Vec<Action>,
}

impl<I: PartialEq> InputBinding<I> {
    /// Check whether a live event triggers this binding.
    #[inline]
    pub fn is_triggered_by(&self, input: &I, modifiers: Modifiers, modes: ModeFlags) -> bool {
        // Input first: it rejects most bindings.
        self.input == *input && self.modifiers == modifiers && matches(modes, &self.modes)
    }

    /// Check whether this binding has exactly the given (modes, modifiers, input) triple.
    #[inline]
    pub fn has_trigger(&self, modes: &MatchModes, modifiers: Modifiers, input: &I) -> bool {
        self.input == *input && self.modifiers == modifiers && self.modes == *modes
    }
}

/// Bindings triggered by named keys.
pub type KeyInputBinding = InputBinding<Key>;
/// Bindings triggered by character input.
pub type CharInputBinding = InputBinding<char>;
/// Bindings triggered by mouse buttons.
pub type MouseInputBinding = InputBinding<MouseButton>;

/// Add `action` to the binding with the identical trigger triple, or append
/// a new binding at the end of the list.
pub fn add_or_append<I: PartialEq>(
    bindings: &mut Vec<InputBinding<I>>,
    modes: MatchModes,
    modifiers: Modifiers,
    input: I,
    action: Action,
) {
    if let Some(existing) = bindings
        .iter_mut()
        .find(|b| b.has_trigger(&modes, modifiers, &input))
    {
        existing.actions.push(action);
        return;
    }

    bindings.push(InputBinding {
        modes,
        modifiers,
        input,
        actions: vec![action],
    });
}

/// Resolve a live event against a binding list.
///
/// Returns the action list of the first binding in insertion order that is
/// triggered by the event, or `None` if the input is unbound.
pub fn resolve<'a, I: PartialEq>(
    bindings: &'a [InputBinding<I>],
    input: &I,
    modifiers: Modifiers,
    modes: ModeFlags,
) -> Option<&'a [Action]> {
    bindings
        .iter()
        .find(|b| b.is_triggered_by(input, modifiers, modes))
        .map(|b| b.actions.as_slice())
}

/// The three binding channels of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputMappings {
    pub key_mappings: Vec<KeyInputBinding>,
    pub char_mappings: Vec<CharInputBinding>,
    pub mouse_mappings: Vec<MouseInputBinding>,
}

impl InputMappings {
    /// Create an empty mapping set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an action for a trigger into the matching channel.
    pub fn add(&mut self, trigger: Trigger, modifiers: Modifiers, modes: MatchModes, action: Action) {
        log::trace!("Binding {modifiers}+{trigger} [{modes}] -> {action}");
        match trigger {
            Trigger::Key(key) => add_or_append(&mut self.key_mappings, modes, modifiers, key, action),
            Trigger::Char(ch) => add_or_append(&mut self.char_mappings, modes, modifiers, ch, action),
            Trigger::Mouse(button) => {
                add_or_append(&mut self.mouse_mappings, modes, modifiers, button, action)
            }
        }
    }

    /// Resolve a named key event.
    pub fn resolve_key(&self, key: Key, modifiers: Modifiers, modes: ModeFlags) -> Option<&[Action]> {
        resolve(&self.key_mappings, &key, modifiers, modes)
    }

    /// Resolve a character event.
    pub fn resolve_char(&self, ch: char, modifiers: Modifiers, modes: ModeFlags) -> Option<&[Action]> {
        resolve(&self.char_mappings, &ch, modifiers, modes)
    }

    /// Resolve a mouse button event.
    pub fn resolve_mouse(
        &self,
        button: MouseButton,
        modifiers: Modifiers,
        modes: ModeFlags,
    ) -> Option<&[Action]> {
        resolve(&self.mouse_mappings, &button, modifiers, modes)
    }

    /// Resolve any trigger against its channel.
    pub fn resolve(&self, trigger: Trigger, modifiers: Modifiers, modes: ModeFlags) -> Option<&[Action]> {
        match trigger {
            Trigger::Key(key) => self.resolve_key(key, modifiers, modes),
            Trigger::Char(ch) => self.resolve_char(ch, modifiers, modes),
            Trigger::Mouse(button) => self.resolve_mouse(button, modifiers, modes),
        }
    }

    /// Total number of bindings across all channels.
    pub fn len(&self) -> usize {
        self.key_mappings.len() + self.char_mappings.len() + self.mouse_mappings.len()
    }

    /// Check if no channel has any binding.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::MatchMode;

    #[test]
    fn test_identical_trigger_appends() {
        let mut bindings = Vec::new();
        add_or_append(&mut bindings, MatchModes::any(), Modifiers::SHIFT, Key::End, Action::ScrollToBottom);
        add_or_append(&mut bindings, MatchModes::any(), Modifiers::SHIFT, Key::End, Action::Quit);

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].actions, vec![Action::ScrollToBottom, Action::Quit]);
    }

    #[test]
    fn test_different_modes_insert_new_binding() {
        let mut bindings = Vec::new();
        let select = MatchModes::any().with(ModeFlags::SELECT, MatchMode::Enabled);
        add_or_append(&mut bindings, MatchModes::any(), Modifiers::SHIFT, Key::End, Action::ScrollToBottom);
        add_or_append(&mut bindings, select, Modifiers::SHIFT, Key::End, Action::Quit);

        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_first_match_wins() {
        let mut bindings = Vec::new();
        let not_insert = MatchModes::any().with(ModeFlags::INSERT, MatchMode::Disabled);
        let not_search = MatchModes::any().with(ModeFlags::SEARCH, MatchMode::Disabled);
        add_or_append(&mut bindings, not_insert, Modifiers::SHIFT, Key::End, Action::ScrollToBottom);
        add_or_append(&mut bindings, not_search, Modifiers::SHIFT, Key::End, Action::Quit);

        let actions = resolve(&bindings, &Key::End, Modifiers::SHIFT, ModeFlags::empty());
        assert_eq!(actions, Some(&[Action::ScrollToBottom][..]));

        // Only the second predicate holds in insert mode.
        let actions = resolve(&bindings, &Key::End, Modifiers::SHIFT, ModeFlags::INSERT);
        assert_eq!(actions, Some(&[Action::Quit][..]));
    }

    #[test]
    fn test_modifiers_compared_exactly() {
        let mut bindings = Vec::new();
        add_or_append(
            &mut bindings,
            MatchModes::any(),
            Modifiers::SHIFT | Modifiers::CONTROL,
            '-',
            Action::DecreaseFontSize,
        );

        assert!(resolve(&bindings, &'-', Modifiers::CONTROL, ModeFlags::empty()).is_none());
        assert!(
            resolve(
                &bindings,
                &'-',
                Modifiers::SHIFT | Modifiers::CONTROL | Modifiers::ALT,
                ModeFlags::empty()
            )
            .is_none()
        );
        assert!(
            resolve(&bindings, &'-', Modifiers::SHIFT | Modifiers::CONTROL, ModeFlags::empty())
                .is_some()
        );
    }

    #[test]
    fn test_mappings_route_by_channel() {
        let mut mappings = InputMappings::new();
        mappings.add(Trigger::Mouse(MouseButton::WheelUp), Modifiers::empty(), MatchModes::any(), Action::ScrollUp);
        mappings.add(Trigger::Char('='), Modifiers::CONTROL, MatchModes::any(), Action::IncreaseFontSize);
        mappings.add(Trigger::Key(Key::F11), Modifiers::empty(), MatchModes::any(), Action::ToggleFullscreen);

        assert_eq!(mappings.len(), 3);
        assert_eq!(mappings.mouse_mappings.len(), 1);
        assert_eq!(
            mappings.resolve_mouse(MouseButton::WheelUp, Modifiers::empty(), ModeFlags::empty()),
            Some(&[Action::ScrollUp][..])
        );
        assert!(
            mappings
                .resolve(Trigger::Char('='), Modifiers::empty(), ModeFlags::empty())
                .is_none()
        );
    }
}
