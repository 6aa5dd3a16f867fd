//! Label revert timers, one pending handle per copy button

use std::collections::HashMap;
use std::time::Duration;

use ptk_app::CopyTarget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Default)]
pub struct RevertTimers {
    handles: HashMap<CopyTarget, i32>,
}

impl RevertTimers {
    /// Replace any pending timer for `target` with one that runs `callback`
    /// after `delay`
    pub fn schedule(&mut self, target: CopyTarget, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel(target);

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(callback);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis) {
            Ok(handle) => {
                self.handles.insert(target, handle);
            }
            Err(e) => log::warn!("setTimeout failed for {:?}: {:?}", target, e),
        }
    }

    pub fn cancel(&mut self, target: CopyTarget) {
        if let Some(handle) = self.handles.remove(&target) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    /// The timer for `target` fired; forget its handle
    pub fn fired(&mut self, target: CopyTarget) {
        self.handles.remove(&target);
    }

    pub fn cancel_all(&mut self) {
        let targets: Vec<CopyTarget> = self.handles.keys().copied().collect();
        for target in targets {
            self.cancel(target);
        }
    }
}
