//! Utilidades menores del navegador.

/// Diálogo de confirmación bloqueante (`window.confirm`).
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
