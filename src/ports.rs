use crate::theme::Theme;

/// Key-value slot holding the manual override, as raw text.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
}

/// Where the active theme becomes visible: the document attribute and the
/// toggle control.
pub trait ThemeSurface {
    fn set_theme(&mut self, theme: Theme);
    fn set_checked(&mut self, checked: bool);
    fn is_checked(&self) -> bool;
}

pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}
