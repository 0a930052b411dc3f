//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the Next/Previous shortcuts
/// - macOS: SUPER (Cmd key) is accepted alongside CONTROL
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const NAV_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const NAV_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Next/Submit shortcut display
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Previous shortcut display
#[cfg(target_os = "macos")]
pub const PREV_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PREV_SHORTCUT: &str = "Ctrl+P";

/// Whether the key carries the navigation modifier
pub fn is_nav_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(NAV_MODIFIERS)
}
