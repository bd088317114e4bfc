use yew::prelude::*;

use crate::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub language: Language,
    pub title: String,
    pub on_toggle: Callback<()>,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <button class="language-toggle" onclick={onclick} title={props.title.clone()}>
            <span class="language-toggle-icon">{"文A"}</span>
            <span>{props.language.toggle_label()}</span>
        </button>
    }
}
