use crate::domain::a001_credit_card::ui::details::CreditCardForm;
use crate::shared::config::load_settings;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Form settings are read once and shared through context.
    provide_context(load_settings());

    view! {
        <ConfigProvider>
            <CreditCardForm />
        </ConfigProvider>
    }
}
