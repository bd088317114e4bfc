use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingChatButtonProps {
    pub label: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FloatingChatButton)]
pub fn floating_chat_button(props: &FloatingChatButtonProps) -> Html {
    html! {
        <>
            <button class="floating-chat" onclick={props.onclick.clone()} title={props.label.clone()}>
                <span class="floating-chat-icon">{"💬"}</span>
                <span class="floating-chat-label">{&props.label}</span>
            </button>
            <style>
                {r#"
                    .floating-chat {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.2rem;
                        border: none;
                        border-radius: 999px;
                        background: linear-gradient(135deg, #8B2F39, #6B4C7A);
                        color: #fff;
                        font-weight: 600;
                        box-shadow: 0 10px 25px rgba(139, 47, 57, 0.35);
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .floating-chat:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 14px 30px rgba(139, 47, 57, 0.45);
                    }
                    .floating-chat-icon {
                        font-size: 1.25rem;
                    }
                    @media (max-width: 640px) {
                        .floating-chat-label {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
