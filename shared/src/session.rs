//! Sesión del cliente y tipos de los endpoints de autenticación.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Vida de la sesión cuando el backend no envía `expires_in`.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 3600;

/// Prueba de autenticación que guarda el cliente.
///
/// O existe completa y sin expirar, o no existe: ningún consumidor observa
/// estados parciales. Se persiste en LocalStorage bajo una clave fija para
/// sobrevivir a las recargas de página.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Construye la sesión a partir de una respuesta de login o registro.
    pub fn from_login(
        token: String,
        user: User,
        expires_in: Option<i64>,
        now: DateTime<Utc>,
    ) -> Self {
        let ttl = expires_in.unwrap_or(DEFAULT_SESSION_TTL_SECS);
        Self {
            token,
            user,
            expires_at: now + Duration::seconds(ttl),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Cuerpo del endpoint de acceso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Cuerpo del endpoint de registro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de los endpoints de autenticación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    /// Segundos de validez del token; opcional en el backend.
    pub expires_in: Option<i64>,
}

impl AuthResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        Session::from_login(self.token, self.user, self.expires_in, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            firstname: "Juan".to_string(),
            lastname: "Pérez".to_string(),
            email: "juan@example.com".to_string(),
        }
    }

    #[test]
    fn session_with_future_expiry_is_valid() {
        let now = Utc::now();
        let session = Session::from_login("tok".to_string(), sample_user(), Some(60), now);
        assert!(!session.is_expired(now));
    }

    #[test]
    fn session_is_expired_at_and_after_the_boundary() {
        let now = Utc::now();
        let session = Session::from_login("tok".to_string(), sample_user(), Some(60), now);
        assert!(session.is_expired(now + Duration::seconds(60)));
        assert!(session.is_expired(now + Duration::seconds(61)));
    }

    #[test]
    fn missing_expires_in_falls_back_to_default_ttl() {
        let now = Utc::now();
        let session = Session::from_login("tok".to_string(), sample_user(), None, now);
        assert_eq!(
            session.expires_at,
            now + Duration::seconds(DEFAULT_SESSION_TTL_SECS)
        );
    }

    #[test]
    fn session_round_trips_through_json() {
        let now = Utc::now();
        let session = Session::from_login("tok".to_string(), sample_user(), Some(120), now);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
