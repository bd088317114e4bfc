use yew::prelude::*;

use crate::chat::{
    LoadState, ModalVisibilityController, SessionKey, WebHostPage, WebScheduler,
};
use crate::config;
use crate::content::ChatText;

#[derive(Properties, PartialEq)]
pub struct ChatModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub text: ChatText,
    #[prop_or_else(config::chat_share_url)]
    pub src: String,
}

pub enum ChatModalMsg {
    FrameLoaded(SessionKey),
    FrameFailed(SessionKey),
    TimedOut(SessionKey),
    Reload,
    Dismiss,
}

/// Overlay around the third-party chat frame. Visibility follows the
/// `is_open` prop; every close affordance goes through `on_close` so the
/// page stays the owner of that flag.
pub struct ChatModal {
    controller: ModalVisibilityController<WebHostPage, WebScheduler>,
}

impl Component for ChatModal {
    type Message = ChatModalMsg;
    type Properties = ChatModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let host = WebHostPage::new(ctx.link().callback(|_| ChatModalMsg::Dismiss));
        let scheduler = WebScheduler::new(ctx.link().callback(ChatModalMsg::TimedOut));
        let mut controller =
            ModalVisibilityController::new(host, scheduler, config::CHAT_LOAD_TIMEOUT_MS);
        if ctx.props().is_open {
            controller.open();
        }
        Self { controller }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatModalMsg::FrameLoaded(key) => self.controller.on_load_success(key),
            ChatModalMsg::FrameFailed(key) => self.controller.on_load_failure(key),
            ChatModalMsg::TimedOut(key) => self.controller.on_timeout(key),
            ChatModalMsg::Reload => self.controller.reload().is_some(),
            ChatModalMsg::Dismiss => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let is_open = ctx.props().is_open;
        if is_open != old_props.is_open {
            if is_open {
                self.controller.open();
            } else {
                self.controller.close();
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.close();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(session) = self.controller.session() else {
            return html! {};
        };
        let (key, state) = (session.key, session.state);
        let props = ctx.props();
        let text = &props.text;
        let dismiss = ctx.link().callback(|_: MouseEvent| ChatModalMsg::Dismiss);
        let reload = ctx.link().callback(|_: MouseEvent| ChatModalMsg::Reload);

        let overlay = match state {
            LoadState::Pending => html! {
                <div class="chat-overlay">
                    <div class="chat-spinner"></div>
                    <p class="chat-overlay-text">{&text.loading}</p>
                </div>
            },
            LoadState::ErrorLoad | LoadState::ErrorTimeout => {
                let title = if state == LoadState::ErrorTimeout {
                    &text.timeout_title
                } else {
                    &text.error_title
                };
                html! {
                    <div class="chat-overlay">
                        <div class="chat-error">
                            <div class="chat-error-icon">{"!"}</div>
                            <p class="chat-error-title">{title}</p>
                            <p class="chat-error-intro">{&text.reasons_intro}</p>
                            <ul class="chat-error-reasons">
                                { for text.reasons.iter().map(|r| html! { <li>{format!("• {}", r)}</li> }) }
                            </ul>
                            <button class="chat-reload" onclick={reload}>
                                {"↻ "}{&text.reload}
                            </button>
                        </div>
                    </div>
                }
            }
            LoadState::Ready => html! {},
        };

        html! {
            <>
                <div class="chat-backdrop" onclick={dismiss.clone()}></div>
                <div class="chat-modal" role="dialog" aria-modal="true">
                    <div class="chat-modal-header">
                        <h2>{&text.title}</h2>
                        <button class="chat-close" onclick={dismiss} aria-label={text.close.clone()}>
                            {"×"}
                        </button>
                    </div>
                    <div class="chat-frame-container">
                        {overlay}
                        <iframe
                            key={key.to_string()}
                            src={props.src.clone()}
                            class={classes!("chat-frame", (state != LoadState::Ready).then(|| "concealed"))}
                            allow="clipboard-write; microphone; camera"
                            allowfullscreen=true
                            frameborder="0"
                            title={text.frame_title.clone()}
                            referrerpolicy="no-referrer-when-downgrade"
                            onload={ctx.link().callback(move |_: Event| ChatModalMsg::FrameLoaded(key))}
                            onerror={ctx.link().callback(move |_: Event| ChatModalMsg::FrameFailed(key))}
                        />
                    </div>
                </div>
                <style>
                    {r#"
                        .chat-backdrop {
                            position: fixed;
                            inset: 0;
                            background: rgba(0, 0, 0, 0.5);
                            backdrop-filter: blur(4px);
                            z-index: 50;
                            animation: chatFadeIn 0.2s ease-out;
                        }
                        .chat-modal {
                            position: fixed;
                            inset: 1rem;
                            background: #fff;
                            border-radius: 1rem;
                            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                            z-index: 50;
                            display: flex;
                            flex-direction: column;
                            overflow: hidden;
                            animation: chatZoomIn 0.2s ease-out;
                        }
                        @media (min-width: 768px) {
                            .chat-modal { inset: 2rem; }
                        }
                        @media (min-width: 1024px) {
                            .chat-modal { inset: 3rem; }
                        }
                        .chat-modal-header {
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                            padding: 1rem 1.5rem;
                            background: linear-gradient(to right, #8B2F39, #6B4C7A);
                        }
                        .chat-modal-header h2 {
                            margin: 0;
                            font-size: 1.25rem;
                            font-weight: 600;
                            color: #fff;
                        }
                        .chat-close {
                            background: none;
                            border: none;
                            color: #fff;
                            font-size: 1.75rem;
                            line-height: 1;
                            padding: 0.25rem 0.6rem;
                            border-radius: 999px;
                            cursor: pointer;
                        }
                        .chat-close:hover {
                            background: rgba(255, 255, 255, 0.2);
                        }
                        .chat-frame-container {
                            flex: 1;
                            position: relative;
                            background: #f9fafb;
                        }
                        .chat-frame {
                            position: absolute;
                            inset: 0;
                            width: 100%;
                            height: 100%;
                            border: 0;
                            opacity: 1;
                            transition: opacity 0.3s ease-in-out;
                        }
                        .chat-frame.concealed {
                            opacity: 0;
                        }
                        .chat-overlay {
                            position: absolute;
                            inset: 0;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            background: #fff;
                            z-index: 10;
                            text-align: center;
                        }
                        .chat-spinner {
                            width: 2rem;
                            height: 2rem;
                            border: 3px solid rgba(139, 47, 57, 0.2);
                            border-top-color: #8B2F39;
                            border-radius: 50%;
                            animation: chatSpin 0.8s linear infinite;
                            margin-bottom: 0.5rem;
                        }
                        .chat-overlay-text {
                            font-size: 0.875rem;
                            color: #4b5563;
                        }
                        .chat-error {
                            padding: 2rem 1.5rem;
                            max-width: 28rem;
                        }
                        .chat-error-icon {
                            width: 3rem;
                            height: 3rem;
                            margin: 0 auto 1rem;
                            border-radius: 50%;
                            border: 3px solid #f97316;
                            color: #f97316;
                            font-weight: 700;
                            font-size: 1.5rem;
                            line-height: 2.6rem;
                        }
                        .chat-error-title {
                            font-weight: 600;
                            color: #1f2937;
                            margin-bottom: 0.5rem;
                        }
                        .chat-error-intro {
                            font-size: 0.875rem;
                            color: #4b5563;
                            margin-bottom: 0.5rem;
                        }
                        .chat-error-reasons {
                            list-style: none;
                            padding: 0;
                            margin: 0 auto 1.5rem;
                            max-width: 20rem;
                            text-align: left;
                            font-size: 0.75rem;
                            color: #6b7280;
                        }
                        .chat-reload {
                            padding: 0.75rem 1.5rem;
                            background: #8B2F39;
                            color: #fff;
                            border: none;
                            border-radius: 0.5rem;
                            cursor: pointer;
                            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        }
                        .chat-reload:hover {
                            background: rgba(139, 47, 57, 0.9);
                        }
                        @keyframes chatFadeIn {
                            from { opacity: 0; }
                            to { opacity: 1; }
                        }
                        @keyframes chatZoomIn {
                            from { opacity: 0; transform: scale(0.95); }
                            to { opacity: 1; transform: scale(1); }
                        }
                        @keyframes chatSpin {
                            to { transform: rotate(360deg); }
                        }
                    "#}
                </style>
            </>
        }
    }
}
