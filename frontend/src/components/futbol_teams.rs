//! Administración de equipos de fútbol: listado, alta, edición y baja.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use iconjerseys_shared::FutbolTeam;

use crate::components::layout::Layout;
use crate::components::team_form::TeamForm;
use crate::config::{HIGHLIGHT_SECS, SUCCESS_MESSAGE_SECS};
use crate::session::use_session;
use crate::web::helpers::confirm;

#[component]
pub fn FutbolTeamsPage() -> impl IntoView {
    let session = use_session();

    let (teams, set_teams) = signal(Vec::<FutbolTeam>::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(None::<String>);
    let (show_form, set_show_form) = signal(false);
    let (editing_team, set_editing_team) = signal(None::<FutbolTeam>);
    let (recently_updated, set_recently_updated) = signal(None::<i64>);
    let (success_message, set_success_message) = signal(None::<String>);

    let load_teams = move || {
        if !session.is_valid() || loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match session.api().get_teams().await {
                Ok(list) => set_teams.set(list),
                Err(e) => {
                    log::error!("Error al cargar equipos: {e}");
                    session.handle_unauthorized(&e);
                    set_error_msg.set(Some(e.user_message("Error al cargar equipos de fútbol")));
                }
            }
            set_loading.set(false);
        });
    };

    // Carga inicial.
    Effect::new(move |_| load_teams());

    // El mensaje de éxito se borra solo a los 3 segundos; un mensaje nuevo
    // reinicia el temporizador.
    let success_timer = StoredValue::new_local(None::<TimeoutHandle>);
    Effect::new(move |_| {
        if success_message.get().is_none() {
            return;
        }
        if let Some(h) = success_timer.get_value() {
            h.clear();
        }
        let handle = set_timeout_with_handle(
            move || set_success_message.set(None),
            Duration::from_secs(SUCCESS_MESSAGE_SECS),
        )
        .ok();
        success_timer.set_value(handle);
    });

    // Resaltado de la fila recién guardada, 2 segundos.
    let highlight_timer = StoredValue::new_local(None::<TimeoutHandle>);
    Effect::new(move |_| {
        if recently_updated.get().is_none() {
            return;
        }
        if let Some(h) = highlight_timer.get_value() {
            h.clear();
        }
        let handle = set_timeout_with_handle(
            move || set_recently_updated.set(None),
            Duration::from_secs(HIGHLIGHT_SECS),
        )
        .ok();
        highlight_timer.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(h) = success_timer.get_value() {
            h.clear();
        }
        if let Some(h) = highlight_timer.get_value() {
            h.clear();
        }
    });

    let handle_new = move |_| {
        set_editing_team.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |team: FutbolTeam| {
        set_editing_team.set(Some(team));
        set_show_form.set(true);
    };

    let handle_delete = move |team: FutbolTeam| {
        if !confirm("¿Seguro que quieres eliminar este equipo?") {
            return;
        }
        spawn_local(async move {
            match session.api().deactivate_team(team.id).await {
                Ok(()) => {
                    set_teams.update(|list| list.retain(|t| t.id != team.id));
                    set_success_message.set(Some("Equipo eliminado exitosamente".to_string()));
                }
                Err(e) => {
                    log::error!("Error al eliminar el equipo {}: {e}", team.id);
                    session.handle_unauthorized(&e);
                    set_error_msg.set(Some(e.user_message("Error al eliminar el equipo")));
                }
            }
        });
    };

    let handle_form_success = move |(saved, is_edit): (FutbolTeam, bool)| {
        set_show_form.set(false);
        set_editing_team.set(None);
        set_recently_updated.set(Some(saved.id));
        set_success_message.set(Some(
            if is_edit {
                "Equipo actualizado exitosamente"
            } else {
                "Equipo creado exitosamente"
            }
            .to_string(),
        ));
        load_teams();
    };

    let handle_form_cancel = move |()| {
        set_show_form.set(false);
        set_editing_team.set(None);
    };

    view! {
        <Layout>
            <div class="bg-white rounded-2xl shadow-lg p-6">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-gray-800">"🛡️ Equipos de Fútbol"</h2>
                    <button
                        class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors font-medium"
                        on:click=handle_new
                    >
                        "+ Nuevo Equipo"
                    </button>
                </div>

                <Show when=move || success_message.get().is_some()>
                    <div class="mb-4 p-3 bg-green-100 border border-green-400 text-green-700 rounded-md flex items-center">
                        <span class="mr-2">"✅"</span>
                        <span>{move || success_message.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show when=move || error_msg.get().is_some()>
                    <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-md flex items-center">
                        <span class="mr-2">"❌"</span>
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <p class="text-center text-gray-500 py-8">
                                "Cargando equipos de fútbol..."
                            </p>
                        }
                    }
                >
                    <Show
                        when=move || !teams.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <p class="text-center text-gray-500 py-8">
                                    "No hay equipos registrados"
                                </p>
                            }
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b-2 border-gray-200 text-gray-600 text-sm uppercase">
                                        <th class="py-3 px-4">"ID"</th>
                                        <th class="py-3 px-4">"Nombre"</th>
                                        <th class="py-3 px-4">"País"</th>
                                        <th class="py-3 px-4 text-right">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || teams.get()
                                        key=|team| team.id
                                        children=move |team: FutbolTeam| {
                                            let edit_team = team.clone();
                                            let delete_team = team.clone();
                                            let row_class = move || {
                                                if recently_updated.get() == Some(team.id) {
                                                    "border-b border-gray-100 bg-green-50 border-l-4 border-green-400 transition-colors"
                                                } else {
                                                    "border-b border-gray-100 hover:bg-gray-50 transition-colors"
                                                }
                                            };
                                            view! {
                                                <tr class=row_class>
                                                    <td class="py-3 px-4 text-gray-500">{team.id}</td>
                                                    <td class="py-3 px-4 font-medium text-gray-800">
                                                        {team.name.clone()}
                                                    </td>
                                                    <td class="py-3 px-4 text-gray-600">
                                                        {team.country.clone()}
                                                    </td>
                                                    <td class="py-3 px-4 text-right space-x-2">
                                                        <button
                                                            class="bg-yellow-400 text-black px-3 py-1 rounded-md hover:bg-yellow-500 transition-colors text-sm"
                                                            on:click=move |_| handle_edit(edit_team.clone())
                                                        >
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="bg-red-500 text-white px-3 py-1 rounded-md hover:bg-red-600 transition-colors text-sm"
                                                            on:click=move |_| handle_delete(delete_team.clone())
                                                        >
                                                            "Eliminar"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </div>

            <Show when=move || show_form.get()>
                <TeamForm
                    item=editing_team.get_untracked()
                    on_success=handle_form_success
                    on_cancel=handle_form_cancel
                />
            </Show>
        </Layout>
    }
}
