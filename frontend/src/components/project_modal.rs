use yew::prelude::*;

use crate::chat::{HostPage, WebHostPage};
use crate::content::{ProjectIntro, ProjectModalText};

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub intro: ProjectIntro,
    pub text: ProjectModalText,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    // Same page lease as the chat modal: scroll lock and Escape while open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let lease = is_open.then(|| WebHostPage::new(on_close).acquire());
                move || drop(lease)
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class="project-backdrop" onclick={close.clone()}></div>
            <div class="project-modal" role="dialog" aria-modal="true">
                <div class="project-modal-header">
                    <h2>{&props.intro.title}</h2>
                    <button class="project-close" onclick={close} aria-label={props.text.close.clone()}>
                        {"×"}
                    </button>
                </div>
                <div class="project-modal-body">
                    { for props.intro.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                    <ul class="project-highlights">
                        { for props.intro.highlights.iter().map(|h| html! { <li>{h}</li> }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                    .project-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                        z-index: 50;
                    }
                    .project-modal {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: min(90vw, 40rem);
                        max-height: 85vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        z-index: 50;
                    }
                    .project-modal-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .project-modal-header h2 {
                        margin: 0;
                        font-size: 1.5rem;
                        color: #8B2F39;
                    }
                    .project-close {
                        background: none;
                        border: none;
                        font-size: 1.75rem;
                        cursor: pointer;
                        color: #6b7280;
                    }
                    .project-modal-body {
                        padding: 1.5rem;
                        color: #374151;
                        line-height: 1.7;
                    }
                    .project-highlights li {
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
        </>
    }
}
