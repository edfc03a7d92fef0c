/// Diagnostic sink for progress and failure messages.
pub trait Logger {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes to the browser console.
#[cfg(target_arch = "wasm32")]
pub struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        web_sys::console::log_1(&format!("INFO: {}", message).into());
    }

    fn error(&self, message: &str) {
        web_sys::console::error_1(&format!("ERROR: {}", message).into());
    }
}
