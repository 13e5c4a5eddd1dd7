//! Formulario modal de equipo: alta y edición comparten la misma pieza.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use iconjerseys_shared::{Draft, FutbolTeam, ResourceForm, TeamFields};

use crate::session::use_session;

#[component]
pub fn TeamForm(
    /// Equipo a editar; `None` crea uno nuevo.
    item: Option<FutbolTeam>,
    /// `(registro guardado, era edición)`.
    #[prop(into)] on_success: Callback<(FutbolTeam, bool)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let is_edit = item.is_some();
    let original = StoredValue::new(item.clone());
    let fields = item
        .as_ref()
        .map(TeamFields::from_record)
        .unwrap_or_default();
    let draft = RwSignal::new(Draft::new(fields));

    let set_name = move |value: String| {
        draft.update(|d| {
            d.fields.name = value;
            d.error = None;
        });
    };
    let set_country = move |value: String| {
        draft.update(|d| {
            d.fields.country = value;
            d.error = None;
        });
    };

    let handle_submit = move || {
        // Candado: un solo envío a la vez.
        let acquired = draft
            .try_update(|d| d.begin_submit())
            .unwrap_or(false);
        if !acquired {
            return;
        }

        let current = draft.with_untracked(|d| d.fields.clone());
        if let Err(e) = current.validate() {
            draft.update(|d| {
                d.error = Some(e.message);
                d.finish_submit();
            });
            return;
        }

        if !session.is_valid() {
            draft.update(Draft::finish_submit);
            return;
        }

        let payload = current.to_payload();
        spawn_local(async move {
            let result = match original.get_value() {
                Some(team) => session.api().update_team(team.id, &payload).await,
                None => session.api().create_team(&payload).await,
            };
            match result {
                Ok(saved) => {
                    // Respuesta sin cuerpo: se sintetiza el registro local.
                    let record = saved.unwrap_or_else(|| {
                        current.merge_fallback(
                            original.get_value().as_ref(),
                            Utc::now().timestamp_millis(),
                        )
                    });
                    draft.update(Draft::finish_submit);
                    on_success.run((record, is_edit));
                }
                Err(e) => {
                    log::error!("Error al guardar el equipo: {e}");
                    session.handle_unauthorized(&e);
                    draft.update(|d| {
                        d.error = Some(e.user_message("Error al guardar el equipo de fútbol"));
                        d.finish_submit();
                    });
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle_submit();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50"
            on:keydown=on_keydown
        >
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-md p-6">
                <h3 class="text-xl font-bold text-gray-800 mb-4">
                    {if is_edit { "Editar Equipo de Fútbol" } else { "Nuevo Equipo de Fútbol" }}
                </h3>

                <Show when=move || draft.with(|d| d.error.is_some())>
                    <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-md flex items-center">
                        <span class="mr-2">"❌"</span>
                        <span>{move || draft.with(|d| d.error.clone().unwrap_or_default())}</span>
                    </div>
                </Show>

                <form class="space-y-4" novalidate on:submit=on_submit>
                    <div>
                        <label for="team-name" class="block text-sm font-medium text-gray-700 mb-1">
                            "Nombre del equipo"
                        </label>
                        <input
                            id="team-name"
                            type="text"
                            placeholder="Real Madrid"
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-400 text-gray-800"
                            prop:value=move || draft.with(|d| d.fields.name.clone())
                            on:input=move |ev| set_name(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label for="team-country" class="block text-sm font-medium text-gray-700 mb-1">
                            "País"
                        </label>
                        <input
                            id="team-country"
                            type="text"
                            placeholder="España"
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-400 text-gray-800"
                            prop:value=move || draft.with(|d| d.fields.country.clone())
                            on:input=move |ev| set_country(event_target_value(&ev))
                        />
                    </div>

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 border border-gray-300 text-gray-700 rounded-md hover:bg-gray-50 transition-colors"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            disabled=move || draft.with(|d| d.in_flight)
                            class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || if draft.with(|d| d.in_flight) { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
