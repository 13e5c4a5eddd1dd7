//! Icon Jerseys — administración de la tienda.
//!
//! Frontend CSR en Leptos contra el API REST de la tienda:
//! - `session`: gestor de sesión (token, expiración, re-validación)
//! - `api`: cliente REST tipado
//! - `web::route` / `web::router`: tabla de rutas y navegación con guards
//! - `components`: pantallas

mod api;
mod config;
mod session;

mod components {
    pub mod dashboard;
    pub mod futbol_teams;
    pub mod layout;
    pub mod login;
    pub mod shirts;
    pub mod signup;
    mod shirt_form;
    mod team_form;
}

// Encapsulación de los API nativos del navegador.
pub(crate) mod web {
    pub mod helpers;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::components::dashboard::DashboardPage;
use crate::components::futbol_teams::FutbolTeamsPage;
use crate::components::login::LoginPage;
use crate::components::shirts::ShirtsPage;
use crate::components::signup::SignupPage;
use crate::session::{SessionContext, init_session};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Asocia cada ruta con su vista.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::FutbolTeams => view! { <FutbolTeamsPage /> }.into_any(),
        AppRoute::Shirts => view! { <ShirtsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="min-h-screen bg-blue-50 flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4 text-gray-600">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Gestor de sesión único, compartido por Context.
    let session = SessionContext::new();
    provide_context(session);

    // 2. Restaura la sesión persistida antes del primer render.
    init_session(&session);

    view! {
        // 3. El router recibe el gestor de sesión para aplicar los guards.
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
