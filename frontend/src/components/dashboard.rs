//! Pantalla de inicio tras el login.

use leptos::prelude::*;

use crate::components::layout::Layout;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="bg-white rounded-2xl shadow-lg p-8 text-center">
                <div class="text-6xl mb-6">"⚽"</div>
                <h2 class="text-3xl font-bold text-gray-800 mb-4">
                    "¡Las mejores camisetas de fútbol, como estas del Real Madrid!"
                </h2>
                <p class="text-lg text-gray-600 mb-8">
                    "Administra los equipos y camisetas de la tienda desde el menú superior."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-2xl mx-auto">
                    <div class="bg-blue-50 rounded-xl p-6">
                        <div class="text-4xl mb-3">"🛡️"</div>
                        <h3 class="text-xl font-semibold text-gray-800 mb-2">"Futbol Teams"</h3>
                        <p class="text-gray-600">"Crea y administra los equipos disponibles"</p>
                    </div>
                    <div class="bg-yellow-50 rounded-xl p-6">
                        <div class="text-4xl mb-3">"👕"</div>
                        <h3 class="text-xl font-semibold text-gray-800 mb-2">"Shirts"</h3>
                        <p class="text-gray-600">"Gestiona el catálogo de camisetas y sus precios"</p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
