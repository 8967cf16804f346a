use async_trait::async_trait;
use leptos::*;

use super::utils::{MessageState, NoticeLevel};

pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Blocking `window.confirm` prompt.
#[derive(Clone, Copy, Default)]
pub struct WindowConfirmer;

impl Confirmer for WindowConfirmer {
    #[cfg(target_arch = "wasm32")]
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Writes notices into the panel's message signal.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    messages: RwSignal<MessageState>,
}

impl SignalNotifier {
    pub fn new(messages: RwSignal<MessageState>) -> Self {
        Self { messages }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => log::warn!("{}", message),
            NoticeLevel::Success | NoticeLevel::Info => log::info!("{}", message),
        }
        self.messages.update(|state| state.set(level, message));
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        write_to_navigator_clipboard(text).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_to_navigator_clipboard(text: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| "No window object".to_string())?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map_err(|_| "Clipboard API unavailable".to_string())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("Clipboard API unavailable".to_string());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| "Clipboard API unavailable".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()
        .and_then(|p| p.dyn_into::<js_sys::Promise>().ok())
        .ok_or_else(|| "Clipboard write rejected".to_string())?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| "Clipboard write rejected".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_to_navigator_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard API unavailable".to_string())
}
