//! Cliente del API REST de la tienda.
//!
//! Envoltorio fino sobre `gloo-net`: adjunta el token bearer cuando la
//! operación lo requiere y normaliza todas las respuestas con
//! [`handle_response`]. Sin lógica de negocio.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use iconjerseys_shared::{
    AuthResponse, FutbolTeam, LoginRequest, RegisterRequest, Shirt, ShirtPayload, TeamPayload,
};

use crate::config::API_BASE_URL;

const GENERIC_SERVER_ERROR: &str = "Error inesperado del servidor";

/// Error normalizado de cualquier llamada al API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de transporte: no hubo respuesta HTTP.
    Network(String),
    /// 401: el servidor rechazó el token.
    Unauthorized(String),
    /// 409: conflicto, típicamente un email ya registrado.
    Conflict(String),
    /// Cualquier otro estado no exitoso, con el mensaje del servidor si existe.
    Server { status: u16, message: String },
    /// Cuerpo de éxito que no se pudo interpretar como JSON.
    Parse(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Conflict(msg)
            | ApiError::Parse(msg) => msg,
            ApiError::Server { message, .. } => message,
        }
    }

    /// Mensaje del servidor tal cual si lo hay; para fallos de transporte,
    /// el mensaje localizado que aporta el llamador.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) | ApiError::Parse(_) => fallback.to_string(),
            other => other.message().to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "error de red: {msg}"),
            ApiError::Unauthorized(msg) => write!(f, "no autorizado: {msg}"),
            ApiError::Conflict(msg) => write!(f, "conflicto: {msg}"),
            ApiError::Server { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Parse(msg) => write!(f, "respuesta ilegible: {msg}"),
        }
    }
}

/// Cuerpo de error del backend: `{"message": "..."}` o `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Convierte una respuesta HTTP en `Ok(Some(T))`, `Ok(None)` para cuerpos
/// vacíos, o el [`ApiError`] que corresponda al estado.
async fn handle_response<T: DeserializeOwned>(res: Response) -> Result<Option<T>, ApiError> {
    let status = res.status();
    if !res.ok() {
        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        return Err(match status {
            401 => ApiError::Unauthorized(message),
            409 => ApiError::Conflict(message),
            _ => ApiError::Server { status, message },
        });
    }

    let text = res.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Cliente del API. Lleva el token de la sesión activa, si la hay.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopApi {
    base_url: String,
    token: Option<String>,
}

impl ShopApi {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: API_BASE_URL.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Adjunta `Authorization: Bearer` si hay token activo.
    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn send_json<B, T>(req: RequestBuilder, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let res = req
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(res).await
    }

    async fn send_empty<T: DeserializeOwned>(req: RequestBuilder) -> Result<Option<T>, ApiError> {
        let res = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(res).await
    }

    // =========================================================
    // Autenticación
    // =========================================================

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        Self::send_json(Request::post(&self.url("/auth/login")), &body)
            .await?
            .ok_or_else(|| ApiError::Parse("respuesta de login vacía".to_string()))
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        Self::send_json(Request::post(&self.url("/auth/register")), req)
            .await?
            .ok_or_else(|| ApiError::Parse("respuesta de registro vacía".to_string()))
    }

    // =========================================================
    // Equipos de fútbol
    // =========================================================

    pub async fn get_teams(&self) -> Result<Vec<FutbolTeam>, ApiError> {
        let req = self.with_auth(Request::get(&self.url("/futbol_teams")));
        Ok(Self::send_empty(req).await?.unwrap_or_default())
    }

    pub async fn create_team(&self, payload: &TeamPayload) -> Result<Option<FutbolTeam>, ApiError> {
        let req = self.with_auth(Request::post(&self.url("/futbol_teams")));
        Self::send_json(req, payload).await
    }

    pub async fn update_team(
        &self,
        id: i64,
        payload: &TeamPayload,
    ) -> Result<Option<FutbolTeam>, ApiError> {
        let req = self.with_auth(Request::put(&self.url(&format!("/futbol_teams/{id}"))));
        Self::send_json(req, payload).await
    }

    /// Baja lógica: el equipo deja de listarse, no se borra físicamente.
    pub async fn deactivate_team(&self, id: i64) -> Result<(), ApiError> {
        let req = self.with_auth(Request::delete(&self.url(&format!("/futbol_teams/{id}"))));
        Self::send_empty::<serde_json::Value>(req).await.map(|_| ())
    }

    // =========================================================
    // Camisetas
    // =========================================================

    /// El catálogo es público: sin header de autenticación.
    pub async fn get_shirts(&self) -> Result<Vec<Shirt>, ApiError> {
        Ok(Self::send_empty(Request::get(&self.url("/shirts")))
            .await?
            .unwrap_or_default())
    }

    #[allow(dead_code)]
    pub async fn get_shirt(&self, id: i64) -> Result<Option<Shirt>, ApiError> {
        Self::send_empty(Request::get(&self.url(&format!("/shirts/{id}")))).await
    }

    pub async fn create_shirt(&self, payload: &ShirtPayload) -> Result<Option<Shirt>, ApiError> {
        let req = self.with_auth(Request::post(&self.url("/shirts")));
        Self::send_json(req, payload).await
    }

    pub async fn update_shirt(
        &self,
        id: i64,
        payload: &ShirtPayload,
    ) -> Result<Option<Shirt>, ApiError> {
        let req = self.with_auth(Request::put(&self.url(&format!("/shirts/{id}"))));
        Self::send_json(req, payload).await
    }

    /// Baja lógica de la camiseta.
    pub async fn deactivate_shirt(&self, id: i64) -> Result<(), ApiError> {
        let req = self.with_auth(Request::delete(&self.url(&format!("/shirts/{id}"))));
        Self::send_empty::<serde_json::Value>(req).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 422,
            message: "El nombre ya existe".to_string(),
        };
        assert_eq!(err.user_message("fallback"), "El nombre ya existe");
    }

    #[test]
    fn user_message_falls_back_on_transport_errors() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message("Error al cargar"), "Error al cargar");
    }

    #[test]
    fn only_401_is_unauthorized() {
        assert!(ApiError::Unauthorized("x".to_string()).is_unauthorized());
        assert!(!ApiError::Conflict("x".to_string()).is_unauthorized());
    }
}
