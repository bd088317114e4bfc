use chrono::Datelike;
use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    chat_modal::ChatModal,
    floating_chat_button::FloatingChatButton,
    language_toggle::LanguageToggle,
    project_modal::ProjectModal,
    reveal::Reveal,
};
use crate::config;
use crate::content::{site_copy, Engine, FeatureCard, SiteCopy};
use crate::i18n::Language;

/// Glyph for an icon name used in the copy files. Unknown names get the
/// rocket, same as the engine grid's fallback.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Clock" => "⏱",
        "Zap" => "⚡",
        "TrendingUp" => "📈",
        "Users" => "👥",
        "Building" => "🏢",
        "Heart" => "❤",
        _ => "🚀",
    }
}

/// `#RRGGBB` plus a low alpha, for the tinted icon tiles.
fn tint(color: &str) -> String {
    format!("{}15", color)
}

#[function_component(Home)]
pub fn home() -> Html {
    let stored_language = use_local_storage::<Language>(config::LANGUAGE_STORAGE_KEY.to_string());
    let language = (*stored_language).unwrap_or_default();
    let copy = use_memo(|language| site_copy(*language), language);
    let chat_open = use_state(|| false);
    let project_open = use_state(|| false);

    {
        use_effect_with_deps(
            move |language: &Language| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", language.html_lang());
                }
                || ()
            },
            language,
        );
    }

    let toggle_language = {
        let stored_language = stored_language.clone();
        Callback::from(move |_: ()| {
            let next = language.toggled();
            info!("Switching language to {}", next.code());
            stored_language.set(next);
        })
    };

    let open_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(true))
    };
    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: ()| chat_open.set(false))
    };
    let open_project = {
        let project_open = project_open.clone();
        Callback::from(move |_: MouseEvent| project_open.set(true))
    };
    let close_project = {
        let project_open = project_open.clone();
        Callback::from(move |_: ()| project_open.set(false))
    };

    let Some(copy) = (*copy).clone() else {
        return html! {
            <main class="home-page">
                <p class="copy-missing">{"Content unavailable. Please try again later."}</p>
            </main>
        };
    };
    let SiteCopy { company, ui, .. } = &*copy;
    let info = &company.company_info;

    html! {
        <main class="home-page">
            <header class="site-header">
                <div class="site-header-inner">
                    <img class="site-logo" src="/images/logo.png" alt={ui.navigation.logo_alt.clone()} width="320" height="322" />
                </div>
            </header>

            <LanguageToggle
                language={language}
                title={ui.navigation.switch_language.clone()}
                on_toggle={toggle_language}
            />

            <ChatModal is_open={*chat_open} on_close={close_chat} text={ui.chat.clone()} />
            <ProjectModal
                is_open={*project_open}
                on_close={close_project}
                intro={company.project_intro.clone()}
                text={ui.project_modal.clone()}
            />
            <FloatingChatButton label={ui.floating_button.label.clone()} onclick={open_chat.clone()} />

            // Hero
            <section class="hero">
                <div class="container narrow">
                    <Reveal delay_ms={200}>
                        <span class="hero-tagline">{&info.tagline}</span>
                    </Reveal>
                    <Reveal delay_ms={300}>
                        <h1 class="hero-title"><span class="gradient-text">{&info.title}</span></h1>
                    </Reveal>
                    <Reveal delay_ms={400}>
                        <p class="hero-slogan">{&info.slogan}</p>
                    </Reveal>
                    <Reveal delay_ms={500}>
                        <p class="hero-subtitle">{&info.subtitle}</p>
                    </Reveal>
                    <Reveal delay_ms={600} class={classes!("hero-actions")}>
                        <button class="cta-button" onclick={open_chat.clone()}>
                            {"🤖 "}{&ui.hero.start_consulting}
                        </button>
                        <button class="secondary-button" onclick={open_project}>
                            {&ui.hero.learn_more}
                        </button>
                    </Reveal>
                    <div class="feature-grid">
                        { for ui.hero.features.iter().enumerate().map(|(i, f)| feature_card(i, f)) }
                    </div>
                </div>
            </section>

            // Empowerment engines
            <section class="engines">
                <div class="container">
                    <Reveal class={classes!("section-heading")}>
                        <h2><span class="gradient-text">{&company.empowerment_engines.title}</span></h2>
                        <p>{&company.empowerment_engines.subtitle}</p>
                    </Reveal>
                    <Reveal zoom={true} class={classes!("engines-concept")}>
                        <img src="/images/engines/four-engines-concept.png" alt={ui.engines.concept_alt.clone()} />
                    </Reveal>
                    <div class="engine-grid">
                        {
                            for company.empowerment_engines.engines.iter().enumerate()
                                .map(|(i, engine)| engine_card(i, engine, &ui.engines.badge))
                        }
                    </div>
                </div>
            </section>

            // Team
            <section class="team">
                <div class="container">
                    <Reveal class={classes!("section-heading")}>
                        <h2><span class="gradient-text">{&ui.team.title}</span></h2>
                        <p>{&ui.team.subtitle}</p>
                    </Reveal>
                    <Reveal zoom={true} class={classes!("team-photo")}>
                        <img src="/images/team/team-photo.jpg" alt={ui.team.photo_alt.clone()} />
                        <div class="team-photo-frame"></div>
                        <div class="team-stats">
                            {
                                for ui.team.stats.iter().map(|stat| html! {
                                    <div class="team-stat">
                                        <div class="team-stat-value">{&stat.value}</div>
                                        <div class="team-stat-label">{&stat.label}</div>
                                    </div>
                                })
                            }
                        </div>
                    </Reveal>
                    <div class="values-grid">
                        {
                            for ui.team.values.iter().enumerate().map(|(i, value)| html! {
                                <Reveal delay_ms={400 + 100 * i as u32} class={classes!("value-card")}>
                                    <div class="value-icon">{&value.icon}</div>
                                    <h4>{&value.title}</h4>
                                    <p>{&value.subtitle}</p>
                                </Reveal>
                            })
                        }
                    </div>
                </div>
            </section>

            // Manifesto
            <section class="manifesto">
                <Reveal class={classes!("container", "narrow")}>
                    <h3>{&ui.manifesto.quote}</h3>
                    <p>{&ui.manifesto.signature}</p>
                    <button class="manifesto-button" onclick={open_chat}>
                        {"🤖 "}{&ui.manifesto.cta}
                    </button>
                </Reveal>
            </section>

            <footer class="site-footer">
                <p>{format!("© {} {}. {}", chrono::Local::now().year(), info.name, ui.footer.rights)}</p>
                <p class="site-footer-focus">{&info.focus}</p>
            </footer>

            <style>{HOME_STYLES}</style>
        </main>
    }
}

fn feature_card(index: usize, feature: &FeatureCard) -> Html {
    html! {
        <Reveal delay_ms={700 + 100 * index as u32} class={classes!("feature-card")}>
            <div class="icon-tile" style={format!("background-color: {};", tint(&feature.color))}>
                <span style={format!("color: {};", feature.color)}>{icon_glyph(&feature.icon)}</span>
            </div>
            <h3>{&feature.title}</h3>
            <p>{&feature.description}</p>
        </Reveal>
    }
}

fn engine_card(index: usize, engine: &Engine, badge: &str) -> Html {
    html! {
        <Reveal delay_ms={100 * index as u32} class={classes!("engine-card")}>
            <div class="engine-head">
                <div class="icon-tile small" style={format!("background-color: {};", tint(&engine.color))}>
                    <span>{icon_glyph(&engine.icon)}</span>
                </div>
                <div>
                    <span
                        class="engine-badge"
                        style={format!("background-color: {}; color: {};", tint(&engine.color), engine.color)}
                    >
                        {format!("{} {}", badge, engine.id)}
                    </span>
                    <h3>{&engine.title}</h3>
                </div>
            </div>
            <div class="engine-items">
                {
                    for engine.items.iter().map(|item| html! {
                        <div class="engine-item" style={format!("border-left-color: {};", engine.color)}>
                            <h4><span style={format!("color: {};", engine.color)}>{"›"}</span>{&item.name}</h4>
                            <p>{&item.description}</p>
                        </div>
                    })
                }
            </div>
        </Reveal>
    }
}

const HOME_STYLES: &str = r#"
    .home-page {
        min-height: 100vh;
        background: linear-gradient(135deg, #fff, #f9fafb, #fff);
        color: #111827;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "PingFang SC", "Microsoft YaHei", sans-serif;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .container.narrow {
        max-width: 72rem;
        text-align: center;
    }
    .gradient-text {
        background: linear-gradient(to right, #8B2F39, #6B4C7A, #C9A872);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .reveal {
        opacity: 0;
        animation-duration: 0.6s;
        animation-timing-function: cubic-bezier(0.16, 1, 0.3, 1);
        animation-fill-mode: forwards;
    }
    .reveal-up { animation-name: revealUp; }
    .reveal-zoom { animation-name: revealZoom; }
    @keyframes revealUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes revealZoom {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(4px);
        border-bottom: 1px solid rgba(229, 231, 235, 0.5);
    }
    .site-header-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 5rem;
        display: flex;
        align-items: center;
    }
    .site-logo {
        height: 3.5rem;
        width: auto;
        object-fit: contain;
    }
    .language-toggle {
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 999px;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        cursor: pointer;
        font-size: 0.875rem;
        color: #374151;
    }
    .language-toggle-icon {
        color: #8B2F39;
        font-weight: 700;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 10rem 1rem 5rem;
    }
    .hero-tagline {
        display: inline-block;
        margin-bottom: 2rem;
        font-size: 1.125rem;
        color: #6b7280;
        letter-spacing: 0.1em;
        font-weight: 300;
    }
    .hero-title {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 700;
        line-height: 1.1;
        margin: 0 0 2rem;
    }
    .hero-slogan {
        font-size: clamp(1.5rem, 3vw, 2.25rem);
        color: #374151;
        font-weight: 500;
        margin-bottom: 2.5rem;
    }
    .hero-subtitle {
        font-size: clamp(1.125rem, 2vw, 1.5rem);
        color: #4b5563;
        max-width: 56rem;
        margin: 0 auto 4rem;
        line-height: 1.6;
        font-weight: 300;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        justify-content: center;
        margin-bottom: 5rem;
    }
    .cta-button, .secondary-button, .manifesto-button {
        min-height: 64px;
        padding: 0 3rem;
        font-size: 1.125rem;
        font-weight: 600;
        border-radius: 0.75rem;
        cursor: pointer;
        transition: box-shadow 0.2s ease, background 0.2s ease;
    }
    .cta-button {
        background: linear-gradient(to right, #8B2F39, #6B4C7A);
        color: #fff;
        border: none;
        box-shadow: 0 20px 25px rgba(139, 47, 57, 0.25);
    }
    .secondary-button {
        background: #fff;
        color: #8B2F39;
        border: 2px solid #8B2F39;
    }
    .feature-grid, .engine-grid, .values-grid {
        display: grid;
        gap: 2rem;
    }
    .feature-grid { grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
    .engine-grid { grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
    .values-grid {
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 1.5rem;
        margin-top: 4rem;
    }
    .feature-card, .engine-card, .value-card {
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 1.5rem;
        padding: 2rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
        transition: box-shadow 0.3s ease, border-color 0.3s ease;
    }
    .feature-card:hover, .engine-card:hover {
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
        border-color: rgba(139, 47, 57, 0.2);
    }
    .feature-card h3 { font-size: 1.5rem; margin: 0 0 0.75rem; }
    .feature-card p { color: #4b5563; }
    .icon-tile {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin: 0 auto 1.5rem;
        font-size: 2rem;
    }
    .icon-tile.small {
        width: 3.5rem;
        height: 3.5rem;
        margin: 0;
        font-size: 1.75rem;
    }
    .engines {
        padding: 6rem 1rem;
        background: linear-gradient(to bottom, #fff, #f9fafb);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: clamp(1.875rem, 4vw, 3rem);
        margin: 0 0 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 48rem;
        margin: 0 auto;
    }
    .engines-concept {
        display: flex;
        justify-content: center;
        margin-bottom: 4rem;
    }
    .engines-concept img {
        width: 100%;
        max-width: 42rem;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .engine-head {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .engine-head h3 { margin: 0.5rem 0 0; font-size: 1.5rem; }
    .engine-badge {
        font-size: 0.875rem;
        font-weight: 600;
        padding: 0.25rem 0.75rem;
        border-radius: 999px;
    }
    .engine-item {
        padding-left: 1rem;
        border-left: 3px solid;
        margin-bottom: 1rem;
        transition: padding-left 0.2s ease;
    }
    .engine-item:hover { padding-left: 1.5rem; }
    .engine-item h4 { margin: 0; color: #1f2937; display: flex; gap: 0.5rem; }
    .engine-item p { margin: 0.25rem 0 0; color: #4b5563; font-size: 0.875rem; }
    .team {
        padding: 6rem 1rem;
        background: linear-gradient(to bottom, #f9fafb, #fff);
    }
    .team-photo {
        position: relative;
        overflow: hidden;
        border-radius: 1.5rem;
        background: linear-gradient(to right, #1f2937, #111827);
        min-height: 400px;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .team-photo img {
        display: block;
        width: 100%;
        height: auto;
        object-fit: contain;
    }
    .team-photo-frame {
        position: absolute;
        inset: 0;
        border: 4px solid rgba(234, 179, 8, 0.8);
        border-radius: 1.5rem;
        pointer-events: none;
    }
    .team-stats {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 2rem;
        padding: 2rem;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
        color: #fff;
    }
    .team-stat { text-align: center; }
    .team-stat-value { font-size: 2.25rem; font-weight: 700; color: #facc15; }
    .team-stat-label { font-size: 0.875rem; color: #d1d5db; }
    .value-card { text-align: center; padding: 1.5rem; }
    .value-icon { font-size: 2.25rem; margin-bottom: 0.75rem; }
    .value-card h4 { margin: 0; font-size: 1.25rem; }
    .value-card p { margin: 0.25rem 0 0; font-size: 0.875rem; color: #6b7280; }
    .manifesto {
        padding: 5rem 1rem;
        background: linear-gradient(to right, #8B2F39, #6B4C7A, #C9A872);
        color: #fff;
    }
    .manifesto h3 { font-size: clamp(1.5rem, 3vw, 2.25rem); line-height: 1.6; margin: 0 0 1.5rem; }
    .manifesto p { font-size: 1.125rem; color: rgba(255, 255, 255, 0.8); margin-bottom: 2rem; }
    .manifesto-button {
        background: #fff;
        color: #8B2F39;
        border: none;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    }
    .manifesto-button:hover { background: #f3f4f6; }
    .site-footer {
        padding: 2rem 1rem;
        text-align: center;
        border-top: 1px solid #e5e7eb;
        font-size: 0.875rem;
        color: #6b7280;
    }
    .site-footer-focus { font-size: 0.75rem; color: #9ca3af; margin-top: 0.5rem; }
    .copy-missing { padding: 8rem 1rem; text-align: center; color: #6b7280; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_in_copy_has_a_glyph() {
        let copy = SiteCopy::load(Language::Zh).unwrap();
        let names = copy
            .ui
            .hero
            .features
            .iter()
            .map(|f| f.icon.as_str())
            .chain(copy.company.empowerment_engines.engines.iter().map(|e| e.icon.as_str()));
        for name in names {
            assert!(name == "Rocket" || icon_glyph(name) != icon_glyph("Rocket"), "{}", name);
        }
    }

    #[test]
    fn unknown_icon_falls_back_to_rocket() {
        assert_eq!(icon_glyph("Sparkles"), "🚀");
    }

    #[test]
    fn tint_appends_alpha() {
        assert_eq!(tint("#8B2F39"), "#8B2F3915");
    }
}
