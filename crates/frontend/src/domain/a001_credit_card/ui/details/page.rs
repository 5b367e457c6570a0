//! Main page of the credit card entry form
//!
//! Layout: tab bar, tab content and Prev/Next in the main column with the
//! document preview under them, the fixed action column on the right.

use super::tabs::{PhaseFieldsTab, SummaryTab};
use super::view_model::CreditCardFormVm;
use crate::shared::config::use_settings;
use crate::shared::icons::icon;
use crate::shared::image_viewer::ImageViewer;
use contracts::domain::a001_credit_card::{FormCommand, Phase};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CreditCardForm() -> impl IntoView {
    let vm = CreditCardFormVm::new(use_settings());
    let accept = vm.settings().image_accept.clone();

    view! {
        <div class="details-container credit-card-form">
            <div class="modal-header">
                <h3 class="modal-title">"Credit Card Entry"</h3>
            </div>

            <div class="modal-body">
                <Banners vm=vm.clone() />

                <div style="display: flex; gap: var(--spacing-md); align-items: flex-start;">
                    <div class="credit-card-form__main" style="flex: 1; min-width: 0;">
                        <div class="details-section" style="padding: var(--spacing-md); background: var(--color-bg-secondary); border-radius: var(--radius-lg);">
                            <TabBar vm=vm.clone() />
                            <TabContent vm=vm.clone() />
                            <PhaseNav vm=vm.clone() />
                        </div>
                        <div class="credit-card-form__preview" style="margin-top: var(--spacing-md);">
                            <ImageViewer src=vm.image_url() />
                        </div>
                    </div>

                    <ActionPanel vm=vm.clone() />
                </div>
            </div>

            <input
                type="file"
                accept=accept
                style="display: none;"
                node_ref=vm.file_input
                on:change={
                    let vm = vm.clone();
                    move |ev| vm.on_file_selected(ev)
                }
            />
        </div>
    }
}

/// Error and success messages above the tabs
#[component]
fn Banners(vm: CreditCardFormVm) -> impl IntoView {
    let error = vm.error;
    let success = vm.success;

    view! {
        {move || error.get().map(|e| view! {
            <div style="width: 100%; margin-bottom: var(--spacing-md);">
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            </div>
        })}
        {move || success.get().map(|s| view! {
            <div style="width: 100%; margin-bottom: var(--spacing-md);">
                <MessageBar intent=MessageBarIntent::Success>{s}</MessageBar>
            </div>
        })}
    }
}

#[component]
fn TabBar(vm: CreditCardFormVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {Phase::ALL
                .into_iter()
                .map(|phase| {
                    let vm = vm.clone();
                    view! {
                        <Button
                            appearance=Signal::derive(move || if active_tab.get() == phase {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            })
                            size=ButtonSize::Small
                            on_click=move |_| vm.set_tab(phase)
                        >
                            {phase.title()}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

#[component]
fn TabContent(vm: CreditCardFormVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    move || match active_tab.get() {
        Phase::Summary => view! { <SummaryTab vm=vm.clone() /> }.into_any(),
        phase => view! { <PhaseFieldsTab vm=vm.clone() phase=phase /> }.into_any(),
    }
}

/// Prev/Next are hidden, not disabled, at the ends of the sequence
#[component]
fn PhaseNav(vm: CreditCardFormVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let vm_prev = vm.clone();
    let vm_next = vm.clone();

    view! {
        <Flex gap=FlexGap::Small justify=FlexJustify::End style="margin-top: var(--spacing-md);">
            <Show when=move || active_tab.get().has_prev()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={
                        let vm = vm_prev.clone();
                        move |_| vm.dispatch(FormCommand::Prev)
                    }
                >
                    {icon(FormCommand::Prev.icon())}
                    " Prev"
                </Button>
            </Show>
            <Show when=move || active_tab.get().has_next()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm_next.clone();
                        move |_| vm.dispatch(FormCommand::Next)
                    }
                >
                    "Next "
                    {icon(FormCommand::Next.icon())}
                </Button>
            </Show>
        </Flex>
    }
}

/// Fixed right-hand column of action buttons
#[component]
fn ActionPanel(vm: CreditCardFormVm) -> impl IntoView {
    view! {
        <div
            class="credit-card-form__actions"
            style="display: flex; flex-direction: column; gap: var(--spacing-sm); width: 140px; flex-shrink: 0;"
        >
            {FormCommand::ACTION_PANEL
                .into_iter()
                .map(|command| {
                    let vm = vm.clone();
                    let appearance = if command == FormCommand::Save {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    };
                    view! {
                        <Button
                            appearance=appearance
                            block=true
                            on_click=move |_| vm.dispatch(command)
                        >
                            {icon(command.icon())}
                            {format!(" {}", command.label())}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
