use super::LoadError;
use arboard::Clipboard;

/// Current clipboard text. An empty clipboard is an error.
pub fn load() -> Result<String, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("clipboard is empty".to_string()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Headless CI has no clipboard; both outcomes are acceptable as long as
    // failures surface as LoadError::Clipboard.
    #[test]
    fn test_clipboard_load_never_panics() {
        match load() {
            Ok(text) => assert!(!text.trim().is_empty()),
            Err(e) => assert!(matches!(e, LoadError::Clipboard(_))),
        }
    }
}
