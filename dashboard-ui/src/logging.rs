use tracing::Level;

#[cfg(target_arch = "wasm32")]
use std::io;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// One formatted event, flushed to the browser console when dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ConsoleLine {
    buf: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

fn max_level(raw: &str) -> Level {
    raw.parse().unwrap_or(Level::INFO)
}

pub fn init(level: &str) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level(level))
        .with_target(false)
        .with_ansi(false)
        .without_time();
    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(ConsoleLine::default);
    // Already installed on re-mount; keep the first subscriber.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(max_level("debug"), Level::DEBUG);
        assert_eq!(max_level("WARN"), Level::WARN);
        assert_eq!(max_level("loud"), Level::INFO);
    }
}
