//! Country detail page: visa requirements, process, FAQ, enquiry sidebar.

use dioxus::prelude::*;

use crate::content::{
    APPLICATION_STEPS, DEFAULT_DETAIL_IMAGE, DEFAULT_PRICE, DEFAULT_PROCESSING_TIME,
    DEFAULT_REQUIREMENTS, VISA_FAQ,
};
use crate::state::{Route, SiteState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Requirements,
    Process,
    Faq,
}

impl DetailTab {
    fn label(&self) -> &'static str {
        match self {
            DetailTab::Requirements => "Requirements",
            DetailTab::Process => "Process",
            DetailTab::Faq => "FAQ",
        }
    }

    fn all() -> &'static [DetailTab] {
        &[DetailTab::Requirements, DetailTab::Process, DetailTab::Faq]
    }
}

/// Detail page for one country, keyed by the slug in the current route.
///
/// Optional record fields fall back to hard-coded defaults here, at render
/// time; the record itself is left untouched.
#[component]
pub fn DetailPage(state: Signal<SiteState>) -> Element {
    let mut state_write = state;
    let state_read = state.read();
    let strings = state_read.locale.strings();
    let record = state_read.detail_record().clone();
    drop(state_read);

    let image = record.image.as_deref().unwrap_or(DEFAULT_DETAIL_IMAGE).to_string();
    let processing_time = record
        .processing_time
        .as_deref()
        .unwrap_or(DEFAULT_PROCESSING_TIME)
        .to_string();
    let price = record.price.as_deref().unwrap_or(DEFAULT_PRICE).to_string();
    let requirements: Vec<String> = match &record.requirements {
        Some(requirements) => requirements.clone(),
        None => DEFAULT_REQUIREMENTS.iter().map(|s| s.to_string()).collect(),
    };
    let region = record.region.label();

    let mut tab = use_signal(|| DetailTab::Requirements);
    let current_tab = tab();

    rsx! {
        div {
            class: "detail",

            // Banner
            section {
                class: "detail-banner",
                style: "background-image: url('{image}')",

                div { class: "detail-banner-overlay" }

                div {
                    class: "detail-banner-content",

                    button {
                        class: "btn btn-ghost detail-back",
                        onclick: move |_| state_write.write().navigate(Route::VisaDirectory),
                        "‹ {strings.nav_visa}"
                    }

                    h1 {
                        class: "detail-title",
                        span { class: "detail-flag", "{record.flag}" }
                        "{record.name}"
                    }
                    span { class: "badge badge-secondary", "📍 {region}" }

                    if let Some(description) = &record.description {
                        p { class: "detail-description", "{description}" }
                    } else {
                        p { class: "detail-description", "Detailed visa information and requirements." }
                    }
                }
            }

            div {
                class: "detail-body",

                div {
                    class: "detail-main",

                    // Stat cards
                    div {
                        class: "stat-cards",
                        div {
                            class: "stat-card",
                            span { class: "stat-glyph", "⏱" }
                            span { class: "stat-label", "Processing" }
                            span { class: "stat-value", "{processing_time}" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-glyph", "💵" }
                            span { class: "stat-label", "Fees" }
                            span { class: "stat-value", "{price}" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-glyph", "🛡" }
                            span { class: "stat-label", "Type" }
                            span { class: "stat-value", "Tourist" }
                        }
                    }

                    // Tabs
                    div {
                        class: "tabs",
                        for t in DetailTab::all() {
                            button {
                                class: if *t == current_tab { "tab tab-active" } else { "tab" },
                                onclick: move |_| tab.set(*t),
                                "{t.label()}"
                            }
                        }
                    }

                    {match current_tab {
                        DetailTab::Requirements => rsx! {
                            div {
                                class: "panel",
                                h3 { class: "panel-title", "📄 Required Documents" }
                                ul {
                                    class: "requirement-list",
                                    for requirement in requirements {
                                        li { class: "requirement-item", "✓ {requirement}" }
                                    }
                                    li {
                                        class: "requirement-item",
                                        "✓ Travel Insurance (Mandatory for some regions)"
                                    }
                                }
                            }
                        },
                        DetailTab::Process => rsx! {
                            div {
                                class: "panel",
                                h3 { class: "panel-title", "Application Steps" }
                                ol {
                                    class: "process-list",
                                    for (i, step) in APPLICATION_STEPS.iter().enumerate() {
                                        li {
                                            class: "process-step",
                                            span { class: "process-number", "{i + 1}" }
                                            div {
                                                h4 { class: "process-title", "{step.title}" }
                                                p { class: "process-description", "{step.description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        DetailTab::Faq => rsx! {
                            div {
                                class: "panel",
                                for item in VISA_FAQ {
                                    div {
                                        class: "faq-item",
                                        h4 { class: "faq-question", "{item.question}" }
                                        p { class: "faq-answer", "{item.answer}" }
                                    }
                                }
                            }
                        },
                    }}
                }

                // Enquiry sidebar
                aside {
                    class: "detail-sidebar",

                    div {
                        class: "enquiry-card",
                        h3 { class: "enquiry-title", "Ready to Apply?" }
                        p { class: "enquiry-subtitle", "Get expert assistance today." }

                        button { class: "btn btn-primary btn-block", "☎ Call to Apply" }
                        button { class: "btn btn-outline btn-block", "💬 WhatsApp Us" }

                        div {
                            class: "enquiry-contact",
                            p { "✉ visa@travelco.com" }
                            p { "Mon - Sat: 9:00 AM - 9:00 PM" }
                        }
                    }

                    div {
                        class: "notice-card",
                        span { class: "notice-glyph", "⚠" }
                        p {
                            class: "notice-text",
                            "Documents must be translated to English if in another language."
                        }
                    }
                }
            }
        }
    }
}
