//! Armazón de las vistas autenticadas: barra de navegación, saludo y la
//! re-validación periódica de la sesión.

use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, set_interval_with_handle};
use leptos::prelude::*;

use crate::config::SESSION_CHECK_INTERVAL_SECS;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let greeting = session
        .current_user()
        .map(|user| format!("Hola {}", user.full_name()))
        .unwrap_or_default();

    // Chequeo inmediato al montar, sin esperar al primer tick.
    session.is_valid();

    // Re-validación periódica: al expirar, is_valid destruye la sesión y el
    // router redirige; el temporizador se detiene ahí mismo.
    let check_timer = StoredValue::new_local(None::<IntervalHandle>);
    let handle = set_interval_with_handle(
        move || {
            if !session.is_valid() {
                if let Some(h) = check_timer.get_value() {
                    h.clear();
                }
                check_timer.set_value(None);
            }
        },
        Duration::from_secs(SESSION_CHECK_INTERVAL_SECS),
    )
    .ok();
    check_timer.set_value(handle);

    on_cleanup(move || {
        if let Some(h) = check_timer.get_value() {
            h.clear();
        }
    });

    let on_logout = move |_| {
        session.logout();
        router.navigate(AppRoute::Login);
    };

    view! {
        <div class="min-h-screen bg-blue-50">
            <div class="bg-white shadow-lg">
                <div class="max-w-6xl mx-auto px-4">
                    <div class="flex justify-between items-center py-4 border-b border-gray-200">
                        <div>
                            <h1 class="text-2xl font-bold text-gray-800">
                                "¡Bienvenido a la Mejor tienda de camisetas! 👕"
                            </h1>
                            <p class="text-gray-600">{greeting}</p>
                        </div>
                        <button
                            class="bg-red-500 text-white px-4 py-2 rounded-md hover:bg-red-600 transition-colors"
                            on:click=on_logout
                        >
                            "Cerrar Sesión"
                        </button>
                    </div>

                    <nav class="py-4">
                        <ul class="flex space-x-8">
                            <li>
                                <button
                                    class="flex items-center px-4 py-2 text-gray-700 hover:text-blue-600 hover:bg-blue-50 rounded-md transition-colors font-medium"
                                    on:click=move |_| router.navigate(AppRoute::Dashboard)
                                >
                                    <span class="mr-2">"🏠"</span>
                                    "Inicio"
                                </button>
                            </li>
                            <li>
                                <button
                                    class="flex items-center px-4 py-2 text-gray-700 hover:text-blue-600 hover:bg-blue-50 rounded-md transition-colors font-medium"
                                    on:click=move |_| router.navigate(AppRoute::FutbolTeams)
                                >
                                    <span class="mr-2">"🛡️"</span>
                                    "Futbol Teams"
                                </button>
                            </li>
                            <li>
                                <button
                                    class="flex items-center px-4 py-2 text-gray-700 hover:text-blue-600 hover:bg-blue-50 rounded-md transition-colors font-medium"
                                    on:click=move |_| router.navigate(AppRoute::Shirts)
                                >
                                    <span class="mr-2">"👕"</span>
                                    "Shirts"
                                </button>
                            </li>
                        </ul>
                    </nav>
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-4 py-8">{children()}</div>
        </div>
    }
}
