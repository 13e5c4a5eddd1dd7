//! Pantalla de acceso.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::{login, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(None::<String>);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        set_error_msg.set(None);

        // Solo formato: las credenciales las juzga el servidor.
        let email_value = email.get_untracked();
        if email_value.trim().is_empty() {
            set_error_msg.set(Some("El email es requerido".to_string()));
            return;
        }
        if !email_value.contains('@') || !email_value.contains('.') {
            set_error_msg.set(Some("Por favor ingresa un email válido".to_string()));
            return;
        }
        if password.get_untracked().trim().is_empty() {
            set_error_msg.set(Some("La contraseña es requerida".to_string()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match login(&session, email.get_untracked(), password.get_untracked()).await {
                Ok(()) => router.navigate(AppRoute::Dashboard),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-blue-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <div class="text-5xl mb-4">"⚽"</div>
                    <h1 class="text-3xl font-bold text-gray-800 mb-1">"Icon Jerseys"</h1>
                    <p class="text-gray-600">"Inicia sesión en tu cuenta"</p>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-md flex items-center">
                        <span class="mr-2">"❌"</span>
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form class="space-y-5" novalidate on:submit=on_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-yellow-700 mb-1">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="tu@email.com"
                            class="w-full px-4 py-3 border border-yellow-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-yellow-400 text-gray-800"
                            prop:value=email
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                if error_msg.get_untracked().is_some() {
                                    set_error_msg.set(None);
                                }
                            }
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-yellow-700 mb-1">
                            "Contraseña"
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            class="w-full px-4 py-3 border border-yellow-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-yellow-400 text-gray-800"
                            prop:value=password
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                if error_msg.get_untracked().is_some() {
                                    set_error_msg.set(None);
                                }
                            }
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="w-full bg-yellow-400 text-black font-semibold py-3 rounded-lg shadow-md hover:bg-yellow-500 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || if is_submitting.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-6">
                    "¿No tienes cuenta? "
                    <a
                        class="text-yellow-500 font-medium hover:text-yellow-600 cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::Signup)
                    >
                        "Regístrate"
                    </a>
                </p>
            </div>
        </div>
    }
}
