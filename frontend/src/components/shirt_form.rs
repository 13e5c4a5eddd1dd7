//! Formulario modal de camiseta, con vista previa del precio final.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use iconjerseys_shared::{Draft, FutbolTeam, ResourceForm, Shirt, ShirtFields};

use crate::session::use_session;

#[component]
pub fn ShirtForm(
    /// Camiseta a editar; `None` crea una nueva.
    item: Option<Shirt>,
    /// Equipos disponibles para el selector.
    teams: Vec<FutbolTeam>,
    /// `(registro guardado, era edición)`.
    #[prop(into)] on_success: Callback<(Shirt, bool)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let is_edit = item.is_some();
    let original = StoredValue::new(item.clone());
    let fields = item
        .as_ref()
        .map(ShirtFields::from_record)
        .unwrap_or_default();
    let draft = RwSignal::new(Draft::new(fields));

    // Un solo setter parametrizado: todos los campos borran el error activo.
    let set_field = move |apply: fn(&mut ShirtFields, String), value: String| {
        draft.update(|d| {
            apply(&mut d.fields, value);
            d.error = None;
        });
    };

    let handle_submit = move || {
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
                Some(shirt) => session.api().update_shirt(shirt.id, &payload).await,
                None => session.api().create_shirt(&payload).await,
            };
            match result {
                Ok(saved) => {
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
                    log::error!("Error al guardar la camiseta: {e}");
                    session.handle_unauthorized(&e);
                    draft.update(|d| {
                        d.error = Some(e.user_message("Error al guardar la camiseta"));
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

    // Vista previa: solo cuando el precio ya es interpretable y hay descuento.
    let price_preview = move || {
        draft.with(|d| {
            let price = d.fields.parsed_price()?;
            let discount = d.fields.parsed_discount();
            if price <= 0.0 || !(1..=100).contains(&discount) {
                return None;
            }
            let final_price = price * (1.0 - f64::from(discount) / 100.0);
            Some((price, final_price))
        })
    };

    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-400 text-gray-800";
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    view! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50"
            on:keydown=on_keydown
        >
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-lg p-6 max-h-[90vh] overflow-y-auto">
                <h3 class="text-xl font-bold text-gray-800 mb-4">
                    {if is_edit { "Editar Camiseta" } else { "Nueva Camiseta" }}
                </h3>

                <Show when=move || draft.with(|d| d.error.is_some())>
                    <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-md flex items-center">
                        <span class="mr-2">"❌"</span>
                        <span>{move || draft.with(|d| d.error.clone().unwrap_or_default())}</span>
                    </div>
                </Show>

                <form class="space-y-4" novalidate on:submit=on_submit>
                    <div>
                        <label for="shirt-team" class=label_class>"Equipo"</label>
                        <select
                            id="shirt-team"
                            class=input_class
                            prop:value=move || draft.with(|d| d.fields.team_id.clone())
                            on:change=move |ev| {
                                set_field(|f, v| f.team_id = v, event_target_value(&ev))
                            }
                        >
                            <option value="">"Seleccionar equipo..."</option>
                            <For
                                each=move || teams.clone()
                                key=|team| team.id
                                children=|team: FutbolTeam| {
                                    view! {
                                        <option value=team.id.to_string()>{team.name.clone()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div>
                        <label for="shirt-name" class=label_class>"Nombre"</label>
                        <input
                            id="shirt-name"
                            type="text"
                            placeholder="Camiseta Local 2025"
                            class=input_class
                            prop:value=move || draft.with(|d| d.fields.name.clone())
                            on:input=move |ev| {
                                set_field(|f, v| f.name = v, event_target_value(&ev))
                            }
                        />
                    </div>

                    <div>
                        <label for="shirt-description" class=label_class>"Descripción"</label>
                        <textarea
                            id="shirt-description"
                            rows="3"
                            placeholder="Tela transpirable, escudo bordado..."
                            class=input_class
                            prop:value=move || draft.with(|d| d.fields.description.clone())
                            on:input=move |ev| {
                                set_field(|f, v| f.description = v, event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <div>
                        <label for="shirt-image" class=label_class>"URL de la imagen"</label>
                        <input
                            id="shirt-image"
                            type="url"
                            placeholder="https://ejemplo.com/camiseta.jpg"
                            class=input_class
                            prop:value=move || draft.with(|d| d.fields.image.clone())
                            on:input=move |ev| {
                                set_field(|f, v| f.image = v, event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for="shirt-price" class=label_class>"Precio (L.)"</label>
                            <input
                                id="shirt-price"
                                type="number"
                                min="0"
                                step="0.01"
                                placeholder="50.00"
                                class=input_class
                                prop:value=move || draft.with(|d| d.fields.price.clone())
                                on:input=move |ev| {
                                    set_field(|f, v| f.price = v, event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label for="shirt-discount" class=label_class>"Descuento (%)"</label>
                            <input
                                id="shirt-discount"
                                type="number"
                                min="0"
                                max="100"
                                placeholder="0"
                                class=input_class
                                prop:value=move || draft.with(|d| d.fields.discount.clone())
                                on:input=move |ev| {
                                    set_field(|f, v| f.discount = v, event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>

                    <Show when=move || price_preview().is_some()>
                        {move || {
                            let (price, final_price) = price_preview().unwrap_or_default();
                            view! {
                                <div class="p-3 bg-green-50 border border-green-200 rounded-md text-sm">
                                    "Precio final: "
                                    <span class="line-through text-gray-400 mr-2">
                                        {format!("L. {price:.2}")}
                                    </span>
                                    <span class="font-bold text-green-700">
                                        {format!("L. {final_price:.2}")}
                                    </span>
                                </div>
                            }
                        }}
                    </Show>

                    <div>
                        <label for="shirt-size" class=label_class>"Talla"</label>
                        <input
                            id="shirt-size"
                            type="text"
                            placeholder="S, M, L, XL..."
                            class=input_class
                            prop:value=move || draft.with(|d| d.fields.size.clone())
                            on:input=move |ev| {
                                set_field(|f, v| f.size = v, event_target_value(&ev))
                            }
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
