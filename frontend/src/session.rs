//! Gestor de sesión.
//!
//! Única autoridad sobre el token: los guards de ruta y cada carga de datos
//! consultan [`SessionContext::is_valid`] antes de actuar, y solo este
//! módulo toca el almacenamiento persistente. El resto del código recibe el
//! contexto por inyección desde `App`.

use chrono::Utc;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use iconjerseys_shared::{RegisterRequest, Session, User};

use crate::api::{ApiError, ShopApi};
use crate::config::STORAGE_SESSION_KEY;

/// Fallo de autenticación, listo para mostrarse.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// El email ya está registrado: se muestra como aviso, no como error.
    Conflict(String),
    /// Credenciales inválidas o fallo de red.
    Failed(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::Conflict(msg) | AuthError::Failed(msg) => msg,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AuthError::Conflict(_))
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

fn auth_error(err: ApiError, fallback: &str) -> AuthError {
    match err {
        ApiError::Conflict(msg) => AuthError::Conflict(msg),
        other => AuthError::Failed(other.user_message(fallback)),
    }
}

/// Contexto de sesión, compartido vía Context de Leptos.
///
/// La sesión es de escritor único (este módulo) y lectores múltiples.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<Option<Session>>,
    set_state: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(None);
        Self { state, set_state }
    }

    /// Señal reactiva de presencia de sesión, para inyectar en el router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_some()))
    }

    /// Chequeo síncrono con efecto: si la sesión ya expiró, la destruye y
    /// devuelve `false`.
    ///
    /// Es una guardia de experiencia de usuario, no una frontera de
    /// seguridad: el servidor rechaza igualmente los tokens inválidos.
    pub fn is_valid(&self) -> bool {
        let now = Utc::now();
        let status = self
            .state
            .with_untracked(|s| s.as_ref().map(|session| session.is_expired(now)));
        match status {
            None => false,
            Some(true) => {
                log::info!("Sesión expirada, cerrando");
                self.clear();
                false
            }
            Some(false) => true,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.state
            .with_untracked(|s| s.as_ref().map(|session| session.user.clone()))
    }

    fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().map(|session| session.token.clone()))
    }

    /// Cliente del API con el token actual.
    pub fn api(&self) -> ShopApi {
        ShopApi::new(self.token())
    }

    /// Cierra la sesión. Idempotente.
    pub fn logout(&self) {
        self.clear();
    }

    /// Un 401 significa que el token ya no sirve: se cierra la sesión y el
    /// router redirige en el siguiente render.
    pub fn handle_unauthorized(&self, err: &ApiError) {
        if err.is_unauthorized() {
            log::warn!("El servidor rechazó el token, cerrando sesión");
            self.clear();
        }
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_SESSION_KEY);
        self.set_state.set(None);
    }

    fn store(&self, session: Session) {
        if let Err(e) = LocalStorage::set(STORAGE_SESSION_KEY, &session) {
            log::error!("No se pudo persistir la sesión: {e}");
        }
        self.set_state.set(Some(session));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Obtiene el contexto de sesión provisto en `App`.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Restaura la sesión persistida al arrancar; la expirada se descarta.
pub fn init_session(ctx: &SessionContext) {
    match LocalStorage::get::<Session>(STORAGE_SESSION_KEY) {
        Ok(session) if !session.is_expired(Utc::now()) => {
            log::info!("Sesión restaurada para {}", session.user.email);
            ctx.set_state.set(Some(session));
        }
        Ok(_) => {
            log::info!("La sesión persistida había expirado");
            LocalStorage::delete(STORAGE_SESSION_KEY);
        }
        Err(_) => {}
    }
}

/// Inicia sesión contra el backend. Nunca reintenta en silencio.
pub async fn login(ctx: &SessionContext, email: String, password: String) -> Result<(), AuthError> {
    let response = ShopApi::new(None)
        .login(&email, &password)
        .await
        .map_err(|e| auth_error(e, "Error al iniciar sesión. Intenta nuevamente."))?;
    let session = response.into_session(Utc::now());
    log::info!("Login correcto: {}", session.user.email);
    ctx.store(session);
    Ok(())
}

/// Crea la cuenta y deja la sesión iniciada.
pub async fn register(ctx: &SessionContext, req: RegisterRequest) -> Result<(), AuthError> {
    let response = ShopApi::new(None)
        .register(&req)
        .await
        .map_err(|e| auth_error(e, "Error al crear la cuenta. Intenta nuevamente."))?;
    let session = response.into_session(Utc::now());
    log::info!("Cuenta creada: {}", session.user.email);
    ctx.store(session);
    Ok(())
}
