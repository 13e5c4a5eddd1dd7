//! Servicio de rutas - motor de navegación.
//!
//! Concentra todo el acceso a la History API y aplica el guard en cada
//! navegación: "petición -> guard -> history -> render". El guard consulta
//! el chequeo síncrono del gestor de sesión, que destruye en el acto una
//! sesión expirada.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::session::SessionContext;

/// Path actual del navegador.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Variante `replaceState`, para redirecciones.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Servicio de rutas.
///
/// Una única pieza de guard parametrizada por los dos predicados de
/// [`AppRoute`] cubre la variante protegida y la pública.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: SessionContext,
}

impl RouterService {
    fn new(session: SessionContext) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navegación con guard.
    pub fn navigate(&self, target: AppRoute) {
        self.navigate_to_route(target, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.session.is_valid();

        // Ruta protegida sin sesión: al login, descartando el destino.
        if target.requires_auth() && !is_auth {
            log::info!("Acceso denegado a {target}, redirigiendo al login");
            self.apply(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        // Pantalla pública con sesión activa: al dashboard.
        if target.should_redirect_when_authenticated() && is_auth {
            log::info!("Sesión activa, redirigiendo al dashboard");
            self.apply(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        self.apply(target, use_push);
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// El guard también aplica al historial (botones atrás/adelante).
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            if target.requires_auth() && !session.is_valid() {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // El listener vive tanto como la aplicación.
        closure.forget();
    }

    /// Redirección automática cuando cambia el estado de autenticación
    /// (login, logout explícito o expiración detectada por el temporizador).
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.session.is_authenticated_signal();

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                    log::info!("Sesión iniciada, entrando al dashboard");
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                log::info!("Sesión cerrada, volviendo al login");
            }
        });
    }
}

fn provide_router(session: SessionContext) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Obtiene el servicio de rutas del Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Componentes
// ============================================================================

/// Raíz del router. Debe envolver la aplicación.
#[component]
pub fn Router(
    /// Gestor de sesión inyectado; alimenta el guard.
    session: SessionContext,
    /// Contenido de la aplicación.
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// Punto de salida: renderiza la vista de la ruta actual.
#[component]
pub fn RouterOutlet(
    /// Función de emparejado: ruta actual -> vista.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
