//! Configuración del cliente.

/// URL base del API REST. Sobrescribible en compilación con `API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://iconjerseys-api.onrender.com/api",
};

/// Clave fija de LocalStorage bajo la que se persiste la sesión.
pub const STORAGE_SESSION_KEY: &str = "iconjerseys_session";

/// Intervalo de la re-validación periódica de la sesión.
pub const SESSION_CHECK_INTERVAL_SECS: u64 = 60;

/// Ventana del aviso transitorio de éxito.
pub const SUCCESS_MESSAGE_SECS: u64 = 3;

/// Ventana del resaltado de la fila recién guardada.
pub const HIGHLIGHT_SECS: u64 = 2;
