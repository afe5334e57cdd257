use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::controller::ThemePreferenceController;
use crate::ports::{PreferenceStore, SystemPreference, ThemeSurface};
use crate::theme::Theme;

pub type WebController = ThemePreferenceController<LocalStorage, DomSurface, MediaQuery>;

pub struct LocalStorage {
    storage: web_sys::Storage,
    key: String,
}

impl LocalStorage {
    pub fn new(window: &web_sys::Window, key: &str) -> Result<Self, JsValue> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is unavailable"))?;
        Ok(LocalStorage {
            storage,
            key: key.to_string(),
        })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self) -> Option<String> {
        self.storage.get_item(&self.key).unwrap_or_else(|e| {
            tracing::warn!("reading {:?} failed: {e:?}", self.key);
            None
        })
    }

    fn set(&mut self, value: &str) {
        if let Err(e) = self.storage.set_item(&self.key, value) {
            tracing::warn!("writing {:?} failed: {e:?}", self.key);
        }
    }
}

pub struct DomSurface {
    root: web_sys::Element,
    attribute: String,
    toggle: web_sys::HtmlInputElement,
}

impl DomSurface {
    pub fn new(document: &web_sys::Document, config: &Config) -> Result<Self, JsValue> {
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        let toggle = toggle_element(document, &config.toggle_id)?;
        Ok(DomSurface {
            root,
            attribute: config.attribute.clone(),
            toggle,
        })
    }
}

impl ThemeSurface for DomSurface {
    fn set_theme(&mut self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            tracing::warn!("setting {} failed: {e:?}", self.attribute);
        }
    }

    fn set_checked(&mut self, checked: bool) {
        self.toggle.set_checked(checked);
    }

    fn is_checked(&self) -> bool {
        self.toggle.checked()
    }
}

pub struct MediaQuery(Option<web_sys::MediaQueryList>);

impl MediaQuery {
    pub fn new(window: &web_sys::Window, query: &str) -> Result<Self, JsValue> {
        Ok(MediaQuery(window.match_media(query)?))
    }

    /// Calls `f` with the new `matches` value on every change. The listener
    /// stays registered for the lifetime of the page.
    pub fn on_change(&self, mut f: impl FnMut(bool) + 'static) -> Result<(), JsValue> {
        let Some(ref list) = self.0 else {
            tracing::warn!("media query unsupported, system changes will be missed");
            return Ok(());
        };
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |e: web_sys::MediaQueryListEvent| f(e.matches()),
        );
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }
}

impl SystemPreference for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.0.as_ref().map(|q| q.matches()).unwrap_or(false)
    }
}

fn toggle_element(
    document: &web_sys::Document,
    id: &str,
) -> Result<web_sys::HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an input")))
}

/// Binds a controller to the current page and subscribes it to system
/// preference changes.
pub fn mount(config: &Config) -> Result<Rc<RefCell<WebController>>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let store = LocalStorage::new(&window, &config.storage_key)?;
    let surface = DomSurface::new(&document, config)?;
    let system = MediaQuery::new(&window, &config.media_query)?;
    let query = MediaQuery(system.0.clone());

    let controller = Rc::new(RefCell::new(ThemePreferenceController::init(
        store, surface, system,
    )));

    let weak = Rc::downgrade(&controller);
    query.on_change(move |prefers_dark| {
        if let Some(controller) = weak.upgrade() {
            controller.borrow_mut().on_system_changed(prefers_dark);
        }
    })?;

    Ok(controller)
}
