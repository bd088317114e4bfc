use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Scale in instead of sliding up.
    #[prop_or_default]
    pub zoom: bool,
}

/// Entrance animation wrapper. Keyframes live in the page stylesheet
/// (`reveal-up` / `reveal-zoom`).
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let kind = if props.zoom { "reveal-zoom" } else { "reveal-up" };
    html! {
        <div
            class={classes!("reveal", kind, props.class.clone())}
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
