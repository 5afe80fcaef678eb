// ============================================================================
// ALERT SERVICE - Single process-wide alert with localized text
// ============================================================================
// Exactly one alert exists. `show` overwrites whatever is there, `close`
// only hides it so the content is still around while the view animates out.
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::state::{PreferencesState, ReactiveState};
use crate::utils::i18n::{replace_params, Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Success, Severity::Error, Severity::Info];

    /// Catalog key of the default title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertOptions {
    pub severity: Severity,
    pub message_key: Option<String>,
    pub message_params: BTreeMap<String, String>,
    pub title: Option<String>,
}

impl AlertOptions {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    pub fn success() -> Self {
        Self::new(Severity::Success)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    pub fn info() -> Self {
        Self::new(Severity::Info)
    }

    pub fn message(mut self, key: impl Into<String>) -> Self {
        self.message_key = Some(key.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_params.insert(name.into(), value.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// What the alert view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertState {
    pub visible: bool,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Switch to the Khmer font stack.
    pub is_khmer: bool,
}

#[derive(Clone)]
pub struct AlertService {
    state: ReactiveState<AlertState>,
    preferences: PreferencesState,
    catalog: Rc<Catalog>,
}

impl AlertService {
    pub fn new(preferences: PreferencesState, catalog: Rc<Catalog>) -> Self {
        Self {
            state: ReactiveState::default(),
            preferences,
            catalog,
        }
    }

    pub fn show(&self, options: AlertOptions) {
        let locale = self.preferences.current_locale();

        let title = match options.title {
            Some(title) if !title.is_empty() => title,
            _ => self.catalog.t(locale, options.severity.title_key()),
        };

        let message = match options.message_key {
            Some(ref key) => replace_params(&self.catalog.t(locale, key), &options.message_params),
            None => String::new(),
        };

        log::info!("🔔 Alert [{:?}] {}: {}", options.severity, title, message);

        self.state.set(AlertState {
            visible: true,
            severity: options.severity,
            title,
            message,
            is_khmer: !locale.is_default(),
        });
    }

    /// Hide the alert. Already hidden: nothing changes, nobody is notified.
    pub fn close(&self) {
        if !self.state.with(|s| s.visible) {
            return;
        }
        self.state.update(|s| s.visible = false);
    }

    pub fn state(&self) -> AlertState {
        self.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.state.with(|s| s.visible)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::i18n::Locale;
    use crate::utils::storage::MemoryStorage;

    fn service_with(catalog: Catalog) -> (AlertService, PreferencesState) {
        let prefs = PreferencesState::new(Rc::new(MemoryStorage::new()));
        (AlertService::new(prefs.clone(), Rc::new(catalog)), prefs)
    }

    #[test]
    fn test_default_title_per_severity_and_locale() {
        let (alerts, prefs) = service_with(Catalog::builtin());
        let catalog = Catalog::builtin();
        for locale in Locale::ALL {
            prefs.switch_locale(locale);
            for severity in Severity::ALL {
                alerts.show(AlertOptions::new(severity));
                let state = alerts.state();
                assert_eq!(state.title, catalog.t(locale, severity.title_key()));
                assert_eq!(state.severity, severity);
                assert!(state.visible);
            }
        }
    }

    #[test]
    fn test_session_ended_scenario() {
        let catalog = Catalog::empty()
            .with_entry(Locale::En, "error", "Error")
            .with_entry(Locale::En, "sessionExpired", "Your session has ended.");
        let (alerts, _) = service_with(catalog);

        alerts.show(AlertOptions::error().message("sessionExpired"));

        assert_eq!(
            alerts.state(),
            AlertState {
                visible: true,
                severity: Severity::Error,
                title: "Error".into(),
                message: "Your session has ended.".into(),
                is_khmer: false,
            }
        );
    }

    #[test]
    fn test_params_replace_first_occurrence_and_keep_unknown() {
        let catalog = Catalog::empty().with_entry(Locale::En, "greet", "Hi {name}, {name}! Ref {ref}");
        let (alerts, _) = service_with(catalog);

        alerts.show(AlertOptions::info().message("greet").param("name", "Dara").param("other", "x"));

        assert_eq!(alerts.state().message, "Hi Dara, {name}! Ref {ref}");
    }

    #[test]
    fn test_missing_key_gives_empty_body() {
        let (alerts, _) = service_with(Catalog::builtin());
        alerts.show(AlertOptions::error().message("noSuchKey"));
        assert_eq!(alerts.state().message, "");
        assert_eq!(alerts.state().title, "Error");

        alerts.show(AlertOptions::success());
        assert_eq!(alerts.state().message, "");
    }

    #[test]
    fn test_explicit_title_wins() {
        let (alerts, _) = service_with(Catalog::builtin());
        alerts.show(AlertOptions::success().title("Saved"));
        assert_eq!(alerts.state().title, "Saved");
    }

    #[test]
    fn test_khmer_flag_follows_locale() {
        let (alerts, prefs) = service_with(Catalog::builtin());
        prefs.switch_locale(Locale::Kh);
        alerts.show(AlertOptions::error().message("sessionExpired"));

        let state = alerts.state();
        assert!(state.is_khmer);
        assert_eq!(state.title, "កំហុស");
        assert!(!state.message.is_empty());
    }

    #[test]
    fn test_second_show_overwrites_first() {
        let (alerts, _) = service_with(Catalog::builtin());
        alerts.show(AlertOptions::error().title("First").message("sessionExpired"));
        alerts.show(AlertOptions::success().message("welcomeBack").param("name", "Sok"));

        let state = alerts.state();
        assert_eq!(state.severity, Severity::Success);
        assert_eq!(state.title, "Success");
        assert_eq!(state.message, "Welcome back, Sok!");
    }

    #[test]
    fn test_close_is_idempotent_and_keeps_content() {
        let (alerts, _) = service_with(Catalog::builtin());
        alerts.show(AlertOptions::info().title("Heads up"));
        alerts.close();
        let closed = alerts.state();
        assert!(!closed.visible);
        assert_eq!(closed.title, "Heads up");

        let notifications = Rc::new(std::cell::Cell::new(0));
        {
            let notifications = notifications.clone();
            alerts.subscribe(move || notifications.set(notifications.get() + 1));
        }
        alerts.close();
        assert_eq!(alerts.state(), closed);
        assert_eq!(notifications.get(), 0);
    }
}
