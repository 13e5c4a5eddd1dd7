//! Pantalla de registro.

use leptos::prelude::*;
use leptos::task::spawn_local;

use iconjerseys_shared::{RegisterRequest, is_valid_email, validate_password};

use crate::session::{register, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    // (mensaje, es_aviso): el conflicto de email se muestra como aviso.
    let (feedback, set_feedback) = signal(None::<(String, bool)>);
    let (is_submitting, set_is_submitting) = signal(false);

    let clear_feedback = move || {
        if feedback.get_untracked().is_some() {
            set_feedback.set(None);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        set_feedback.set(None);

        if firstname.get_untracked().trim().is_empty() {
            set_feedback.set(Some(("El nombre es requerido".to_string(), false)));
            return;
        }
        if lastname.get_untracked().trim().is_empty() {
            set_feedback.set(Some(("El apellido es requerido".to_string(), false)));
            return;
        }
        let email_value = email.get_untracked();
        if email_value.trim().is_empty() {
            set_feedback.set(Some(("El email es requerido".to_string(), false)));
            return;
        }
        if !is_valid_email(&email_value) {
            set_feedback.set(Some((
                "Por favor ingresa un email válido".to_string(),
                false,
            )));
            return;
        }
        let password_value = password.get_untracked();
        if let Err(msg) = validate_password(&password_value) {
            set_feedback.set(Some((msg, false)));
            return;
        }
        if password_value != confirm.get_untracked() {
            set_feedback.set(Some(("Las contraseñas no coinciden".to_string(), false)));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = RegisterRequest {
                firstname: firstname.get_untracked().trim().to_string(),
                lastname: lastname.get_untracked().trim().to_string(),
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
            };
            match register(&session, req).await {
                Ok(()) => router.navigate(AppRoute::Dashboard),
                Err(e) => set_feedback.set(Some((e.message().to_string(), e.is_conflict()))),
            }
            set_is_submitting.set(false);
        });
    };

    let input_class = "w-full px-4 py-3 border border-yellow-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-yellow-400 text-gray-800";
    let label_class = "block text-sm font-medium text-yellow-700 mb-1";

    view! {
        <div class="min-h-screen bg-blue-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <div class="text-5xl mb-4">"👕"</div>
                    <h1 class="text-3xl font-bold text-gray-800 mb-1">"Crear Cuenta"</h1>
                    <p class="text-gray-600">"Únete a Icon Jerseys"</p>
                </div>

                <Show when=move || feedback.get().is_some()>
                    {move || {
                        let (message, is_warning) = feedback.get().unwrap_or_default();
                        let (class, icon) = if is_warning {
                            (
                                "mb-4 p-3 bg-orange-100 border border-orange-400 text-orange-700 rounded-md flex items-center",
                                "⚠️",
                            )
                        } else {
                            (
                                "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-md flex items-center",
                                "❌",
                            )
                        };
                        view! {
                            <div class=class>
                                <span class="mr-2">{icon}</span>
                                <span>{message}</span>
                            </div>
                        }
                    }}
                </Show>

                <form class="space-y-4" novalidate on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for="firstname" class=label_class>"Nombre"</label>
                            <input
                                id="firstname"
                                type="text"
                                placeholder="Juan"
                                class=input_class
                                prop:value=firstname
                                on:input=move |ev| {
                                    set_firstname.set(event_target_value(&ev));
                                    clear_feedback();
                                }
                            />
                        </div>
                        <div>
                            <label for="lastname" class=label_class>"Apellido"</label>
                            <input
                                id="lastname"
                                type="text"
                                placeholder="Pérez"
                                class=input_class
                                prop:value=lastname
                                on:input=move |ev| {
                                    set_lastname.set(event_target_value(&ev));
                                    clear_feedback();
                                }
                            />
                        </div>
                    </div>

                    <div>
                        <label for="email" class=label_class>"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="tu@email.com"
                            class=input_class
                            prop:value=email
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                clear_feedback();
                            }
                        />
                    </div>

                    <div>
                        <label for="password" class=label_class>"Contraseña"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Mínimo 8 caracteres, letras y números"
                            class=input_class
                            prop:value=password
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                clear_feedback();
                            }
                        />
                    </div>

                    <div>
                        <label for="confirm" class=label_class>"Confirmar Contraseña"</label>
                        <input
                            id="confirm"
                            type="password"
                            placeholder="Repite tu contraseña"
                            class=input_class
                            prop:value=confirm
                            on:input=move |ev| {
                                set_confirm.set(event_target_value(&ev));
                                clear_feedback();
                            }
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="w-full bg-yellow-400 text-black font-semibold py-3 rounded-lg shadow-md hover:bg-yellow-500 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || if is_submitting.get() { "Creando cuenta..." } else { "Crear Cuenta" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-6">
                    "¿Ya tienes cuenta? "
                    <a
                        class="text-yellow-500 font-medium hover:text-yellow-600 cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::Login)
                    >
                        "Inicia sesión"
                    </a>
                </p>
            </div>
        </div>
    }
}
