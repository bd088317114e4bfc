use std::rc::Rc;

use log::error;
use serde::Deserialize;

use crate::i18n::Language;

const COMPANY_ZH: &str = include_str!("../content/company.zh.json");
const COMPANY_EN: &str = include_str!("../content/company.en.json");
const UI_ZH: &str = include_str!("../content/ui.zh.json");
const UI_EN: &str = include_str!("../content/ui.en.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub company_info: CompanyInfo,
    pub empowerment_engines: EmpowermentEngines,
    pub project_intro: ProjectIntro,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub slogan: String,
    pub subtitle: String,
    pub focus: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmpowermentEngines {
    pub title: String,
    pub subtitle: String,
    pub engines: Vec<Engine>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Engine {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub items: Vec<EngineItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EngineItem {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectIntro {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiText {
    pub navigation: Navigation,
    pub hero: Hero,
    pub engines: EnginesText,
    pub team: Team,
    pub manifesto: Manifesto,
    pub chat: ChatText,
    pub project_modal: ProjectModalText,
    pub floating_button: FloatingButtonText,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub switch_language: String,
    pub logo_alt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub start_consulting: String,
    pub learn_more: String,
    pub features: Vec<FeatureCard>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnginesText {
    pub badge: String,
    pub concept_alt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub title: String,
    pub subtitle: String,
    pub photo_alt: String,
    pub stats: Vec<TeamStat>,
    pub values: Vec<CoreValue>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamStat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoreValue {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Manifesto {
    pub quote: String,
    pub signature: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatText {
    pub title: String,
    pub frame_title: String,
    pub loading: String,
    pub error_title: String,
    pub timeout_title: String,
    pub reasons_intro: String,
    pub reasons: Vec<String>,
    pub reload: String,
    pub close: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectModalText {
    pub close: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FloatingButtonText {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub rights: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteCopy {
    pub language: Language,
    pub company: CompanyData,
    pub ui: UiText,
}

impl SiteCopy {
    pub fn load(language: Language) -> Result<Self, serde_json::Error> {
        let (company, ui) = match language {
            Language::Zh => (COMPANY_ZH, UI_ZH),
            Language::En => (COMPANY_EN, UI_EN),
        };
        Ok(Self {
            language,
            company: serde_json::from_str(company)?,
            ui: serde_json::from_str(ui)?,
        })
    }
}

/// Copy for `language`, or for the other language if that one doesn't parse.
pub fn site_copy(language: Language) -> Option<Rc<SiteCopy>> {
    match SiteCopy::load(language) {
        Ok(copy) => Some(Rc::new(copy)),
        Err(e) => {
            error!("copy for '{}' is broken: {}", language.code(), e);
            SiteCopy::load(language.toggled())
                .map_err(|e| error!("fallback copy is broken too: {}", e))
                .ok()
                .map(Rc::new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_parse() {
        for language in [Language::Zh, Language::En] {
            let copy = SiteCopy::load(language).unwrap();
            assert_eq!(copy.language, language);
            assert!(!copy.company.company_info.name.is_empty());
        }
    }

    #[test]
    fn languages_have_the_same_shape() {
        let zh = SiteCopy::load(Language::Zh).unwrap();
        let en = SiteCopy::load(Language::En).unwrap();

        let zh_engines = &zh.company.empowerment_engines.engines;
        let en_engines = &en.company.empowerment_engines.engines;
        assert_eq!(zh_engines.len(), 4);
        assert_eq!(zh_engines.len(), en_engines.len());
        for (a, b) in zh_engines.iter().zip(en_engines) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.icon, b.icon);
            assert_eq!(a.color, b.color);
            assert_eq!(a.items.len(), b.items.len());
        }

        assert_eq!(zh.ui.hero.features.len(), 3);
        assert_eq!(zh.ui.hero.features.len(), en.ui.hero.features.len());
        assert_eq!(zh.ui.team.stats.len(), en.ui.team.stats.len());
        assert_eq!(zh.ui.team.values.len(), en.ui.team.values.len());
        assert_eq!(zh.ui.chat.reasons.len(), en.ui.chat.reasons.len());
    }

    #[test]
    fn site_copy_serves_requested_language() {
        let copy = site_copy(Language::En).unwrap();
        assert_eq!(copy.language, Language::En);
        assert_eq!(copy.ui.footer.rights, "All rights reserved.");
    }
}
