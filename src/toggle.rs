#![allow(non_snake_case)]

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::Config;
use crate::web::{self, WebController};

#[component]
pub fn ThemeToggle(config: Config) -> Element {
    let mut controller = use_signal(|| None::<Rc<RefCell<WebController>>>);

    let mount_config = config.clone();
    use_effect(move || match web::mount(&mount_config) {
        Ok(c) => {
            tracing::info!("theme toggle mounted: {}", c.borrow().theme());
            *controller.write() = Some(c);
        }
        Err(e) => tracing::error!("theme toggle not mounted: {e:?}"),
    });

    rsx! {
        label { class: "theme-toggle inline-flex items-center gap-2 cursor-pointer", r#for: "{config.toggle_id}",
            input {
                id: "{config.toggle_id}",
                r#type: "checkbox",
                class: "h-4 w-4",
                onchange: move |_| {
                    if let Some(ref c) = *controller.read() {
                        c.borrow_mut().on_toggle_input();
                    }
                }
            }
            span { class: "select-none", "Light mode" }
        }
    }
}
