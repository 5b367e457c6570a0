//! Field group of one input phase, rendered from the field catalogue

use super::super::view_model::CreditCardFormVm;
use contracts::domain::a001_credit_card::{FieldId, Phase};
use leptos::prelude::*;

#[component]
pub fn PhaseFieldsTab(vm: CreditCardFormVm, phase: Phase) -> impl IntoView {
    let (left, right) = phase.columns();

    view! {
        <div class="details-section">
            <div class="details-grid--2col">
                <FieldColumn vm=vm.clone() fields=left />
                <FieldColumn vm=vm fields=right />
            </div>
        </div>
    }
}

#[component]
fn FieldColumn(vm: CreditCardFormVm, fields: Vec<FieldId>) -> impl IntoView {
    view! {
        <div>
            {fields
                .into_iter()
                .map(|field| {
                    let vm = vm.clone();
                    let value = vm.field_value(field);
                    view! {
                        <div class="form__group form__group--inline">
                            <label class="form__label" for=field.key()>{field.label()}</label>
                            <input
                                type="text"
                                id=field.key()
                                name=field.key()
                                class="form__input"
                                prop:value=move || value.get()
                                on:input=move |ev| vm.edit_field(field, event_target_value(&ev))
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
