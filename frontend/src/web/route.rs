//! Tabla de rutas - modelo de dominio.
//!
//! Capa pura, sin DOM ni web_sys: define cada ruta de la aplicación y qué
//! variante de guard le corresponde.

use std::fmt::Display;

/// Rutas de la aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Pantalla de acceso (ruta por defecto).
    #[default]
    Login,
    /// Registro de cuenta nueva.
    Signup,
    /// Vista de inicio autenticada.
    Dashboard,
    /// Gestor de equipos de fútbol.
    FutbolTeams,
    /// Gestor de camisetas.
    Shirts,
    /// Ruta desconocida.
    NotFound,
}

impl AppRoute {
    /// Interpreta un path del navegador.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            "/futbol-teams" => Self::FutbolTeams,
            "/shirts" => Self::Shirts,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::FutbolTeams => "/futbol-teams",
            Self::Shirts => "/shirts",
            Self::NotFound => "/404",
        }
    }

    /// Variante protegida del guard: solo se entra con sesión válida.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::FutbolTeams | Self::Shirts)
    }

    /// Variante pública del guard: un usuario autenticado no vuelve a ver
    /// el acceso ni el registro.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Destino al fallar el guard protegido. El deep-link se descarta.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Destino al fallar el guard público.
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    }

    #[test]
    fn known_paths_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Dashboard,
            AppRoute::FutbolTeams,
            AppRoute::Shirts,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/otra-cosa"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/shirts/3"), AppRoute::NotFound);
    }

    #[test]
    fn managers_and_dashboard_are_protected() {
        for route in [AppRoute::Dashboard, AppRoute::FutbolTeams, AppRoute::Shirts] {
            assert!(route.requires_auth());
            assert!(!route.should_redirect_when_authenticated());
        }
    }

    #[test]
    fn auth_screens_are_public_only() {
        for route in [AppRoute::Login, AppRoute::Signup] {
            assert!(!route.requires_auth());
            assert!(route.should_redirect_when_authenticated());
        }
    }
}
