//! Administración del catálogo de camisetas.
//!
//! Misma orquestación que los equipos, con una carga secundaria: la lista
//! de equipos alimenta el selector del formulario y la columna "Equipo".

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use iconjerseys_shared::{FutbolTeam, Shirt};

use crate::components::layout::Layout;
use crate::components::shirt_form::ShirtForm;
use crate::config::{HIGHLIGHT_SECS, SUCCESS_MESSAGE_SECS};
use crate::session::use_session;
use crate::web::helpers::confirm;

#[component]
pub fn ShirtsPage() -> impl IntoView {
    let session = use_session();

    let (shirts, set_shirts) = signal(Vec::<Shirt>::new());
    let (teams, set_teams) = signal(Vec::<FutbolTeam>::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(None::<String>);
    let (show_form, set_show_form) = signal(false);
    let (editing_shirt, set_editing_shirt) = signal(None::<Shirt>);
    let (recently_updated, set_recently_updated) = signal(None::<i64>);
    let (success_message, set_success_message) = signal(None::<String>);

    let load_shirts = move || {
        if !session.is_valid() || loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match session.api().get_shirts().await {
                Ok(list) => set_shirts.set(list),
                Err(e) => {
                    log::error!("Error al cargar camisetas: {e}");
                    session.handle_unauthorized(&e);
                    set_error_msg.set(Some(e.user_message("Error al cargar camisetas")));
                }
            }

            // Carga secundaria, de mejor esfuerzo: sin equipos la tabla
            // sigue siendo usable.
            match session.api().get_teams().await {
                Ok(list) => set_teams.set(list),
                Err(e) => {
                    log::warn!("Error al cargar equipos: {e}");
                    set_teams.set(Vec::new());
                }
            }

            set_loading.set(false);
        });
    };

    // Carga inicial.
    Effect::new(move |_| load_shirts());

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

    // Nombre del equipo de una camiseta; el registro huérfano se señala.
    let team_name = move |team_id: i64| {
        teams.with(|list| {
            list.iter()
                .find(|team| team.id == team_id)
                .map(|team| team.name.clone())
                .unwrap_or_else(|| "Equipo no encontrado".to_string())
        })
    };

    let handle_new = move |_| {
        set_editing_shirt.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |shirt: Shirt| {
        set_editing_shirt.set(Some(shirt));
        set_show_form.set(true);
    };

    let handle_delete = move |shirt: Shirt| {
        if !confirm("¿Seguro que quieres eliminar esta camiseta?") {
            return;
        }
        spawn_local(async move {
            match session.api().deactivate_shirt(shirt.id).await {
                Ok(()) => {
                    set_shirts.update(|list| list.retain(|s| s.id != shirt.id));
                    set_success_message.set(Some("Camiseta eliminada exitosamente".to_string()));
                }
                Err(e) => {
                    log::error!("Error al eliminar la camiseta {}: {e}", shirt.id);
                    session.handle_unauthorized(&e);
                    set_error_msg.set(Some(e.user_message("Error al eliminar la camiseta")));
                }
            }
        });
    };

    let handle_form_success = move |(saved, is_edit): (Shirt, bool)| {
        set_show_form.set(false);
        set_editing_shirt.set(None);
        set_recently_updated.set(Some(saved.id));
        set_success_message.set(Some(
            if is_edit {
                "Camiseta actualizada"
            } else {
                "Camiseta creada"
            }
            .to_string(),
        ));
        load_shirts();
    };

    let handle_form_cancel = move |()| {
        set_show_form.set(false);
        set_editing_shirt.set(None);
    };

    view! {
        <Layout>
            <div class="bg-white rounded-2xl shadow-lg p-6">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-gray-800">"👕 Camisetas"</h2>
                    <button
                        class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors font-medium"
                        on:click=handle_new
                    >
                        "+ Nueva Camiseta"
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
                            <p class="text-center text-gray-500 py-8">"Cargando camisetas..."</p>
                        }
                    }
                >
                    <Show
                        when=move || !shirts.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <p class="text-center text-gray-500 py-8">
                                    "No hay camisetas registradas"
                                </p>
                            }
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="w-full text-left">
                                <thead>
                                    <tr class="border-b-2 border-gray-200 text-gray-600 text-sm uppercase">
                                        <th class="py-3 px-4">"Nombre"</th>
                                        <th class="py-3 px-4">"Equipo"</th>
                                        <th class="py-3 px-4">"Precio"</th>
                                        <th class="py-3 px-4">"Descuento"</th>
                                        <th class="py-3 px-4">"Precio Final"</th>
                                        <th class="py-3 px-4">"Talla"</th>
                                        <th class="py-3 px-4 text-right">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || shirts.get()
                                        key=|shirt| shirt.id
                                        children=move |shirt: Shirt| {
                                            let edit_shirt = shirt.clone();
                                            let delete_shirt = shirt.clone();
                                            let row_class = move || {
                                                if recently_updated.get() == Some(shirt.id) {
                                                    "border-b border-gray-100 bg-green-50 border-l-4 border-green-400 transition-colors"
                                                } else {
                                                    "border-b border-gray-100 hover:bg-gray-50 transition-colors"
                                                }
                                            };
                                            view! {
                                                <tr class=row_class>
                                                    <td class="py-3 px-4 font-medium text-gray-800">
                                                        {shirt.name.clone()}
                                                    </td>
                                                    <td class="py-3 px-4 text-gray-600">
                                                        {move || team_name(shirt.team_id)}
                                                    </td>
                                                    <td class="py-3 px-4 text-gray-600">
                                                        {format!("L. {:.2}", shirt.price)}
                                                    </td>
                                                    <td class="py-3 px-4 text-gray-600">
                                                        {if shirt.discount > 0 {
                                                            format!("{}%", shirt.discount)
                                                        } else {
                                                            "—".to_string()
                                                        }}
                                                    </td>
                                                    <td class="py-3 px-4 font-semibold text-gray-800">
                                                        {format!("L. {:.2}", shirt.final_price())}
                                                    </td>
                                                    <td class="py-3 px-4 text-gray-600">
                                                        {shirt.size.clone()}
                                                    </td>
                                                    <td class="py-3 px-4 text-right space-x-2">
                                                        <button
                                                            class="bg-yellow-400 text-black px-3 py-1 rounded-md hover:bg-yellow-500 transition-colors text-sm"
                                                            on:click=move |_| handle_edit(edit_shirt.clone())
                                                        >
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="bg-red-500 text-white px-3 py-1 rounded-md hover:bg-red-600 transition-colors text-sm"
                                                            on:click=move |_| handle_delete(delete_shirt.clone())
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
                <ShirtForm
                    item=editing_shirt.get_untracked()
                    teams=teams.get_untracked()
                    on_success=handle_form_success
                    on_cancel=handle_form_cancel
                />
            </Show>
        </Layout>
    }
}
