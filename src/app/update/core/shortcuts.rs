use crate::app::state::App;
use crate::app::update::Effect;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

impl App {
    pub(super) fn handle_key_pressed(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        effects: &mut Vec<Effect>,
    ) {
        if modifiers.command() || modifiers.alt() {
            return;
        }
        let Some(token) = pressed_token(&key) else {
            return;
        };
        if binding_matches(&self.config.key_next_page, &token) {
            self.handle_next_page();
        } else if binding_matches(&self.config.key_prev_page, &token) {
            self.handle_previous_page();
        } else if binding_matches(&self.config.key_bookmark, &token) {
            effects.push(Effect::SaveBookmark);
        } else if binding_matches(&self.config.key_toggle_overlays, &token) {
            self.handle_toggle_dialogue_overlays();
        } else if binding_matches(&self.config.key_toggle_mute, &token) {
            self.handle_toggle_mute();
        } else if binding_matches(&self.config.key_toggle_fullscreen, &token) {
            self.handle_toggle_fullscreen(effects);
        } else if binding_matches(&self.config.key_safe_quit, &token) {
            effects.push(Effect::QuitSafely);
        } else if token == "escape" && self.ui.fullscreen {
            self.handle_toggle_fullscreen(effects);
        } else if token == "space" {
            self.handle_next_page();
        }
    }
}

fn pressed_token(key: &Key) -> Option<String> {
    match key {
        Key::Named(Named::ArrowRight) => Some("right".to_string()),
        Key::Named(Named::ArrowLeft) => Some("left".to_string()),
        Key::Named(Named::ArrowUp) => Some("up".to_string()),
        Key::Named(Named::ArrowDown) => Some("down".to_string()),
        Key::Named(Named::Space) => Some("space".to_string()),
        Key::Named(Named::Escape) => Some("escape".to_string()),
        Key::Named(Named::Enter) => Some("enter".to_string()),
        Key::Character(text) => Some(text.as_str().to_ascii_lowercase()),
        _ => None,
    }
}

fn binding_matches(binding: &str, token: &str) -> bool {
    let binding = binding.trim().to_ascii_lowercase();
    let binding = match binding.as_str() {
        "spacebar" => "space",
        "esc" => "escape",
        other => other,
    };
    binding == token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::fixtures::sample_app;
    use crate::flip::FlipSurface;

    fn press(app: &mut App, key: Key) -> Vec<Effect> {
        let mut effects = Vec::new();
        app.handle_key_pressed(key, Modifiers::default(), &mut effects);
        effects
    }

    #[test]
    fn arrow_keys_page_through_the_book() {
        let mut app = sample_app();
        press(&mut app, Key::Named(Named::ArrowRight));
        assert!(app.pager.surface.is_flipping());
    }

    #[test]
    fn letter_bindings_are_case_insensitive() {
        let mut app = sample_app();
        let before = app.ui.muted;
        press(&mut app, Key::Character("M".into()));
        assert_ne!(app.ui.muted, before);
    }

    #[test]
    fn bookmark_key_requests_a_save() {
        let mut app = sample_app();
        let effects = press(&mut app, Key::Character("b".into()));
        assert_eq!(effects, vec![Effect::SaveBookmark]);
    }

    #[test]
    fn modified_keys_are_ignored() {
        let mut app = sample_app();
        let mut effects = Vec::new();
        app.handle_key_pressed(
            Key::Character("q".into()),
            Modifiers::CTRL,
            &mut effects,
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn escape_only_leaves_fullscreen() {
        let mut app = sample_app();
        assert!(press(&mut app, Key::Named(Named::Escape)).is_empty());
        app.ui.fullscreen = true;
        let effects = press(&mut app, Key::Named(Named::Escape));
        assert_eq!(effects, vec![Effect::SetFullscreen(false)]);
    }

    #[test]
    fn binding_aliases_normalize() {
        assert!(binding_matches("Spacebar", "space"));
        assert!(binding_matches(" esc ", "escape"));
        assert!(!binding_matches("right", "left"));
    }
}
