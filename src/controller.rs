use crate::ports::{PreferenceStore, SystemPreference, ThemeSurface};
use crate::theme::Theme;

/// Keeps the stored override, the document attribute and the toggle control
/// showing the same theme.
pub struct ThemePreferenceController<S, U, O> {
    store: S,
    surface: U,
    system: O,
    active: Theme,
}

impl<S, U, O> ThemePreferenceController<S, U, O>
where
    S: PreferenceStore,
    U: ThemeSurface,
    O: SystemPreference,
{
    pub fn init(store: S, surface: U, system: O) -> Self {
        let stored = store.get().as_deref().and_then(Theme::parse);
        let mut this = ThemePreferenceController {
            store,
            surface,
            system,
            active: Theme::Light,
        };
        match stored {
            Some(theme) => {
                tracing::info!("restoring stored theme: {theme}");
                this.apply(theme);
            }
            None => {
                let theme = Theme::from_prefers_dark(this.system.prefers_dark());
                tracing::info!("no stored theme, following system: {theme}");
                // the fallback stays unpersisted so a system change can still apply
                this.render(theme);
            }
        }
        this
    }

    pub fn theme(&self) -> Theme {
        self.active
    }

    pub fn has_override(&self) -> bool {
        self.store.get().as_deref().and_then(Theme::parse).is_some()
    }

    pub fn apply(&mut self, theme: Theme) {
        self.render(theme);
        self.store.set(theme.as_str());
    }

    pub fn on_toggle_changed(&mut self, checked: bool) {
        let theme = Theme::from_checked(checked);
        tracing::debug!("toggle changed: checked={checked}, theme={theme}");
        self.apply(theme);
    }

    /// Reads the control's current state and handles it as a change.
    pub fn on_toggle_input(&mut self) {
        let checked = self.surface.is_checked();
        self.on_toggle_changed(checked);
    }

    pub fn on_system_changed(&mut self, prefers_dark: bool) {
        if self.has_override() {
            tracing::debug!("system preference changed, stored theme kept");
            return;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        tracing::info!("system preference changed: {theme}");
        self.apply(theme);
    }

    fn render(&mut self, theme: Theme) {
        self.active = theme;
        self.surface.set_theme(theme);
        self.surface.set_checked(theme.is_light());
    }
}

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
#[derive(Clone, Default)]
struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

#[cfg(test)]
impl MemoryStore {
    fn with(value: &str) -> Self {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value()
    }

    fn set(&mut self, value: &str) {
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
struct MemorySurface {
    theme: Rc<Cell<Option<Theme>>>,
    checked: Rc<Cell<bool>>,
}

#[cfg(test)]
impl ThemeSurface for MemorySurface {
    fn set_theme(&mut self, theme: Theme) {
        self.theme.set(Some(theme));
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked.set(checked);
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }
}

#[cfg(test)]
struct System(bool);

#[cfg(test)]
impl SystemPreference for System {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
type Controller = ThemePreferenceController<MemoryStore, MemorySurface, System>;

#[cfg(test)]
fn setup(store: MemoryStore, prefers_dark: bool) -> (Controller, MemoryStore, MemorySurface) {
    let _ = tracing_subscriber::fmt::try_init();

    let surface = MemorySurface::default();
    let controller =
        ThemePreferenceController::init(store.clone(), surface.clone(), System(prefers_dark));
    (controller, store, surface)
}

#[test]
fn test_init_from_stored() {
    for (stored, theme) in [("light", Theme::Light), ("dark", Theme::Dark)] {
        // the system signal is the opposite of what is stored
        let (controller, store, surface) = setup(MemoryStore::with(stored), theme == Theme::Light);
        assert_eq!(controller.theme(), theme);
        assert_eq!(surface.theme.get(), Some(theme));
        assert_eq!(surface.checked.get(), theme == Theme::Light);
        assert_eq!(store.value().as_deref(), Some(stored));
        assert_eq!(store.writes.get(), 1);
    }
}

#[test]
fn test_init_from_system() {
    let (controller, store, surface) = setup(MemoryStore::default(), true);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert!(!surface.checked.get());
    assert_eq!(store.value(), None);
    assert_eq!(store.writes.get(), 0);
    assert!(!controller.has_override());

    let (controller, store, surface) = setup(MemoryStore::default(), false);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(surface.theme.get(), Some(Theme::Light));
    assert!(surface.checked.get());
    assert_eq!(store.writes.get(), 0);
}

#[test]
fn test_init_ignores_invalid_stored() {
    for junk in ["blue", "Dark", "", "light "] {
        let (controller, store, surface) = setup(MemoryStore::with(junk), true);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(surface.theme.get(), Some(Theme::Dark));
        assert_eq!(store.value().as_deref(), Some(junk));
        assert_eq!(store.writes.get(), 0);
        assert!(!controller.has_override());
    }
}

#[test]
fn test_toggle_persists() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), true);
    assert!(!surface.checked.get());

    controller.on_toggle_changed(true);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(surface.theme.get(), Some(Theme::Light));
    assert!(surface.checked.get());
    assert_eq!(store.value().as_deref(), Some("light"));

    controller.on_toggle_changed(false);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert!(controller.has_override());
}

#[test]
fn test_toggle_input_reads_control() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), true);

    // the user ticks the box before the change event fires
    surface.checked.set(true);
    controller.on_toggle_input();
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(surface.theme.get(), Some(Theme::Light));
    assert_eq!(store.value().as_deref(), Some("light"));

    surface.checked.set(false);
    controller.on_toggle_input();
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert_eq!(store.value().as_deref(), Some("dark"));
}

#[test]
fn test_system_change_after_toggle_ignored() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), false);
    controller.on_toggle_changed(false);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));

    controller.on_system_changed(false);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert!(!surface.checked.get());
    assert_eq!(store.value().as_deref(), Some("dark"));
}

#[test]
fn test_system_change_with_stored_ignored() {
    let (mut controller, _, surface) = setup(MemoryStore::with("light"), false);
    controller.on_system_changed(true);
    assert_eq!(surface.theme.get(), Some(Theme::Light));
}

#[test]
fn test_system_change_applied() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), false);

    controller.on_system_changed(true);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert!(!surface.checked.get());
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert_eq!(store.writes.get(), 1);
    assert!(controller.has_override());
}

#[test]
fn test_system_change_persists_once() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), false);

    controller.on_system_changed(true);
    assert_eq!(store.value().as_deref(), Some("dark"));

    // the first change was stored, so this one is ignored
    controller.on_system_changed(false);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(surface.theme.get(), Some(Theme::Dark));
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert_eq!(store.writes.get(), 1);
}

#[test]
fn test_system_change_read_at_event_time() {
    let (mut controller, store, surface) = setup(MemoryStore::default(), false);
    // written behind the controller's back, e.g. by another tab
    *store.value.borrow_mut() = Some("light".to_string());
    controller.on_system_changed(true);
    assert_eq!(surface.theme.get(), Some(Theme::Light));
    assert_eq!(store.writes.get(), 0);
}

#[test]
fn test_apply_idempotent() {
    let (mut once, once_store, once_surface) = setup(MemoryStore::default(), false);
    once.apply(Theme::Dark);

    assert_eq!(once.theme(), Theme::Dark);
    assert_eq!(once_store.value().as_deref(), Some("dark"));
    assert_eq!(once_surface.theme.get(), Some(Theme::Dark));
    assert!(!once_surface.checked.get());
    assert_eq!(once_store.writes.get(), 1);

    let (mut twice, twice_store, twice_surface) = setup(MemoryStore::default(), false);
    twice.apply(Theme::Dark);
    twice.apply(Theme::Dark);

    assert_eq!(twice.theme(), Theme::Dark);
    assert_eq!(twice_store.value().as_deref(), Some("dark"));
    assert_eq!(twice_surface.theme.get(), Some(Theme::Dark));
    assert!(!twice_surface.checked.get());
    assert_eq!(twice_store.writes.get(), 2);

    assert_eq!(once_store.value(), twice_store.value());
    assert_eq!(once_surface.checked.get(), twice_surface.checked.get());
}
