//! Inline SVG icons
//!
//! All glyphs use `currentColor` so the svg style can tint them.

/// Two vertical bars
pub const PAUSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><rect x="5" y="3" width="5" height="18" rx="1.2"/><rect x="14" y="3" width="5" height="18" rx="1.2"/></svg>"#;

/// Double triangle pointing right
pub const FORWARD: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M1.5 5.2c0-.9 1-1.4 1.7-.9l8.3 6.1c.6.5.6 1.4 0 1.9l-8.3 6.1c-.7.5-1.7 0-1.7-.9z"/><path d="M12 5.2c0-.9 1-1.4 1.7-.9l8.3 6.1c.6.5.6 1.4 0 1.9l-8.3 6.1c-.7.5-1.7 0-1.7-.9z"/></svg>"#;

/// Double triangle pointing left
pub const BACKWARD: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M22.5 5.2c0-.9-1-1.4-1.7-.9l-8.3 6.1c-.6.5-.6 1.4 0 1.9l8.3 6.1c.7.5 1.7 0 1.7-.9z"/><path d="M12 5.2c0-.9-1-1.4-1.7-.9L2 10.4c-.6.5-.6 1.4 0 1.9l8.3 6.1c.7.5 1.7 0 1.7-.9z"/></svg>"#;

/// Three horizontal dots
pub const ELLIPSIS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><circle cx="5" cy="12" r="2"/><circle cx="12" cy="12" r="2"/><circle cx="19" cy="12" r="2"/></svg>"#;

/// Eighth note, used on the artwork placeholder
pub const MUSIC: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M9 17.5a3.5 3.5 0 1 1-2-3.16V5.5l12-2.5v11.5a3.5 3.5 0 1 1-2-3.16V7.4L9 9.1z"/></svg>"#;

/// Tab: Listen Now (play in a circle)
pub const LISTEN_NOW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 6.2c0-.6.7-1 1.2-.7l5 3.3c.5.3.5 1 0 1.4l-5 3.3c-.5.3-1.2 0-1.2-.7z"/></svg>"#;

/// Tab: Browse (grid)
pub const BROWSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><rect x="3" y="3" width="8" height="8" rx="2"/><rect x="13" y="3" width="8" height="8" rx="2"/><rect x="3" y="13" width="8" height="8" rx="2"/><rect x="13" y="13" width="8" height="8" rx="2"/></svg>"#;

/// Tab: Radio (broadcast waves)
pub const RADIO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"><circle cx="12" cy="12" r="2" fill="currentColor"/><path d="M8.5 8.5a5 5 0 0 0 0 7M15.5 8.5a5 5 0 0 1 0 7M5.6 5.6a9 9 0 0 0 0 12.8M18.4 5.6a9 9 0 0 1 0 12.8"/></svg>"#;

/// Tab: Music (stacked squares)
pub const LIBRARY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><rect x="3" y="7" width="14" height="14" rx="2"/><path d="M7 3h12a2 2 0 0 1 2 2v12h-2V5H7z"/></svg>"#;

/// Tab: Search (magnifier)
pub const SEARCH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.2" stroke-linecap="round"><circle cx="10.5" cy="10.5" r="6.5"/><path d="M15.5 15.5L21 21"/></svg>"#;
