//! Concrete [`BindingAdapter`]s.
//!
//! - `DomAdapter` (wasm): the live browser document through `web-sys`.
//! - [`HeadlessAdapter`]: no document at all; used by native builds.

use super::binding::{Binding, BindingAdapter, BindingError, TransitionState};
use super::LanguageCode;

/// Class applied to an element for each transition stage.
pub fn transition_class(state: TransitionState) -> Option<&'static str> {
    match state {
        TransitionState::Idle => None,
        TransitionState::Leaving => Some("lang-change-leave"),
        TransitionState::Entering => Some("lang-change-enter"),
        TransitionState::Settling => Some("lang-change-enter-active"),
    }
}

/// Every class [`transition_class`] can produce.
pub const TRANSITION_CLASSES: [&str; 3] = [
    "lang-change-leave",
    "lang-change-enter",
    "lang-change-enter-active",
];

#[cfg(target_arch = "wasm32")]
pub use web::DomAdapter;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

    use super::*;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct DomAdapter;

    impl DomAdapter {
        fn document() -> Option<Document> {
            web_sys::window().and_then(|w| w.document())
        }

        fn root() -> Option<Element> {
            Self::document().and_then(|d| d.document_element())
        }

        fn attached(target: &Element) -> Result<(), BindingError> {
            if target.is_connected() {
                Ok(())
            } else {
                Err(BindingError::Detached)
            }
        }
    }

    impl BindingAdapter for DomAdapter {
        type Target = Element;

        fn query_by_marker(&self, marker: &str) -> Vec<Binding<Element>> {
            let Some(document) = Self::document() else {
                return Vec::new();
            };
            let Ok(nodes) = document.query_selector_all(&format!("[{marker}]")) else {
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .filter_map(|element| {
                    let key = element.get_attribute(marker)?;
                    (!key.is_empty()).then(|| Binding::new(element, key))
                })
                .collect()
        }

        fn is_input(&self, target: &Element) -> bool {
            target.is_instance_of::<HtmlInputElement>()
                || target.is_instance_of::<HtmlTextAreaElement>()
        }

        fn set_content(&self, target: &Element, text: &str) -> Result<(), BindingError> {
            Self::attached(target)?;
            target.set_text_content(Some(text));
            Ok(())
        }

        fn set_attribute(&self, target: &Element, name: &str, text: &str) -> Result<(), BindingError> {
            Self::attached(target)?;
            target
                .set_attribute(name, text)
                .map_err(|_| BindingError::Rejected(format!("attribute `{name}`")))
        }

        fn apply_transition_state(
            &self,
            target: &Element,
            state: TransitionState,
        ) -> Result<(), BindingError> {
            Self::attached(target)?;
            let classes = target.class_list();
            for class in TRANSITION_CLASSES {
                if Some(class) != transition_class(state) {
                    classes.remove_1(class).ok();
                }
            }
            if let Some(class) = transition_class(state) {
                classes
                    .add_1(class)
                    .map_err(|_| BindingError::Rejected(format!("class `{class}`")))?;
            }
            Ok(())
        }

        fn set_root_class(&self, class: &str, enabled: bool) {
            let Some(root) = Self::root() else {
                return;
            };
            let classes = root.class_list();
            let _ = if enabled {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }

        fn set_document_language(&self, code: &LanguageCode) {
            if let Some(root) = Self::root() {
                root.set_attribute("lang", code.as_str()).ok();
            }
        }
    }
}

/// Adapter for environments without a document. Queries find nothing and
/// writes succeed without effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessAdapter;

impl BindingAdapter for HeadlessAdapter {
    type Target = ();

    fn query_by_marker(&self, _marker: &str) -> Vec<Binding<()>> {
        Vec::new()
    }

    fn is_input(&self, _target: &()) -> bool {
        false
    }

    fn set_content(&self, _target: &(), _text: &str) -> Result<(), BindingError> {
        Ok(())
    }

    fn set_attribute(&self, _target: &(), _name: &str, _text: &str) -> Result<(), BindingError> {
        Ok(())
    }

    fn apply_transition_state(&self, _target: &(), _state: TransitionState) -> Result<(), BindingError> {
        Ok(())
    }

    fn set_root_class(&self, _class: &str, _enabled: bool) {}

    fn set_document_language(&self, _code: &LanguageCode) {}
}
