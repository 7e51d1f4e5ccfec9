//! Per-locale display metadata for categories.

use super::{CategoryKey, Locale};

/// Icon, title, and description shown for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDisplay {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn display(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> CategoryDisplay {
    CategoryDisplay {
        icon,
        title,
        description,
    }
}

pub fn category_display(key: CategoryKey, locale: Locale) -> CategoryDisplay {
    match locale {
        Locale::Fi => match key {
            CategoryKey::Overview => display(
                "📋",
                "Yleiskatsaus",
                "Projektin yleiskuvaus ja keskeiset tiedot",
            ),
            CategoryKey::NextSteps => display(
                "🚀",
                "Jatkotutkimus",
                "Suunnitelmat ja seuraavat askeleet",
            ),
            CategoryKey::Guidelines => display(
                "📏",
                "Ohjeet",
                "Dokumentaatio- ja koodausohjeet",
            ),
            CategoryKey::Results => display(
                "📊",
                "Tulokset",
                "Analyysien ja kokeiden tulokset",
            ),
            CategoryKey::Phase => display(
                "🔬",
                "Vaiheet",
                "Tutkimuksen vaiheittainen dokumentaatio",
            ),
            CategoryKey::Code => display(
                "💻",
                "Koodidokumentaatio",
                "Moduulien ja toteutuksen tekninen dokumentaatio",
            ),
        },
        Locale::En => match key {
            CategoryKey::Overview => display(
                "📋",
                "Overview",
                "Project summary and key information",
            ),
            CategoryKey::NextSteps => display(
                "🚀",
                "Next Steps",
                "Plans and future research directions",
            ),
            CategoryKey::Guidelines => display(
                "📏",
                "Guidelines",
                "Documentation and coding guidelines",
            ),
            CategoryKey::Results => display(
                "📊",
                "Results",
                "Outcomes of analyses and experiments",
            ),
            CategoryKey::Phase => display(
                "🔬",
                "Phases",
                "Phase-by-phase research documentation",
            ),
            CategoryKey::Code => display(
                "💻",
                "Code Documentation",
                "Technical documentation for modules and implementation",
            ),
        },
    }
}
