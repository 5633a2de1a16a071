use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::{
    accessibility::{is_dismiss_key, FOCUSABLE_SELECTOR},
    config::EffectsConfig,
    content::{
        section_href, ABOUT_PARAGRAPHS, CONTACTS, EDUCATION, EXPERIENCE, HERO_ACTIONS,
        HERO_SUBTITLE, HERO_SUMMARY, NAV_LINKS, OWNER_INITIALS, OWNER_NAME, PROFILE_IMAGE, ROLES,
        SECTION_IDS, SKILL_CATEGORIES,
    },
    dom,
    logging::{log_event, LogLevel},
    navigation::{MenuAction, MenuState},
    typing::{RoleList, TypingEngine, TypingTimings},
    widgets::{
        use_config, use_window_scroll, ContactCard, CtaButton, EducationCard, ExperienceItem,
        LazyImage, ParticleField, RoleTag, ScrollTopButton, SkillCategoryCard,
    },
};

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self).apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let config = use_config();
    let menu = use_reducer(MenuState::default);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        let metrics = config.nav;
        use_window_scroll(Callback::from(move |offset: f64| {
            scrolled.set(metrics.is_scrolled(offset));

            let sections = dom::section_offsets(&SECTION_IDS);
            active.set(metrics.active_section(&sections, offset));
        }));
    }

    {
        let dispatcher = menu.dispatcher();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };

                    if is_dismiss_key(&event.key()) {
                        dispatcher.dispatch(MenuAction::Dismiss);
                    }
                })
            });

            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let links = NAV_LINKS.iter().map(|link| {
        let section_id = link.section_id;
        let metrics = config.nav;
        let dispatcher = menu.dispatcher();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dispatcher.dispatch(MenuAction::LinkClicked);

            if let Some(top) = dom::element_offset_top(section_id) {
                dom::smooth_scroll_to(metrics.scroll_target(top));
            }
        });
        let is_active = *active == Some(section_id);

        html! {
            <li>
                <a
                    class={classes!("nav-link", is_active.then_some("active"))}
                    href={section_href(section_id)}
                    {onclick}
                >
                    {link.label}
                </a>
            </li>
        }
    });

    let [top_bar, middle_bar, bottom_bar] = menu.bars().styles();

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a class="nav-logo" href="#home">{OWNER_INITIALS}</a>
                <ul id="navMenu" class={classes!("nav-menu", menu.open.then_some("active"))}>
                    { for links }
                </ul>
                <button
                    id="navToggle"
                    class="nav-toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    onclick={on_toggle}
                >
                    <span style={top_bar}></span>
                    <span style={middle_bar}></span>
                    <span style={bottom_bar}></span>
                </button>
            </div>
        </nav>
    }
}

struct TypewriterState {
    engine: Option<TypingEngine>,
    pending: Option<u32>,
    generation: u64,
}

impl TypewriterState {
    fn new(timings: TypingTimings) -> Self {
        Self {
            engine: RoleList::new(ROLES)
                .ok()
                .map(|roles| TypingEngine::new(roles, timings)),
            pending: None,
            generation: 0,
        }
    }

    fn text(&self) -> Option<String> {
        self.engine.as_ref().and_then(TypingEngine::text)
    }
}

enum TypewriterAction {
    Start,
    Step,
    Stop,
}

impl Reducible for TypewriterState {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(mut engine) = self.engine.clone() else {
            return self;
        };

        let stopping = matches!(action, TypewriterAction::Stop);
        let pending = match action {
            TypewriterAction::Start => engine.start(),
            TypewriterAction::Step => engine.advance(),
            TypewriterAction::Stop => {
                engine.stop();
                None
            }
        };

        if pending.is_none() && !stopping {
            return self;
        }

        Rc::new(Self {
            engine: Some(engine),
            pending,
            generation: self.generation + 1,
        })
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_config();
    let typewriter = {
        let timings = config.typing;
        use_reducer(move || TypewriterState::new(timings))
    };

    {
        let dispatcher = typewriter.dispatcher();
        use_effect_with((), move |_| {
            let listener = if dom::document_is_loaded() {
                dispatcher.dispatch(TypewriterAction::Start);
                None
            } else {
                let on_load = dispatcher.clone();
                window().map(|win| {
                    EventListener::once(&win, "load", move |_| {
                        on_load.dispatch(TypewriterAction::Start);
                    })
                })
            };

            move || {
                drop(listener);
                dispatcher.dispatch(TypewriterAction::Stop);
            }
        });
    }

    {
        let dispatcher = typewriter.dispatcher();
        use_effect_with(
            (typewriter.generation, typewriter.pending),
            move |&(_, pending)| {
                let timeout = pending.map(|delay| {
                    Timeout::new(delay, move || {
                        dispatcher.dispatch(TypewriterAction::Step);
                    })
                });

                move || drop(timeout)
            },
        );
    }

    let subtitle = typewriter
        .text()
        .unwrap_or_else(|| HERO_SUBTITLE.to_string());

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">{"Hi, I'm"}</p>
                <h1 class="hero-title">{OWNER_NAME}</h1>
                <p class="hero-subtitle" aria-live="polite">{subtitle}</p>
                <p class="hero-description">{HERO_SUMMARY}</p>
                <div class="hero-buttons">
                    { for HERO_ACTIONS.iter().map(|action| html! {
                        <CtaButton label={action.label} href={action.href} primary={action.primary} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="section">
            <h2 class="section-title">{"About Me"}</h2>
            <div class="about-content">
                <LazyImage class={classes!("about-image")} src={PROFILE_IMAGE} alt={format!("Portrait of {OWNER_NAME}")} />
                <div class="about-text">
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    html! {
        <section id="skills" class="section">
            <h2 class="section-title">{"Skills"}</h2>
            <div class="skills-grid">
                { for SKILL_CATEGORIES.iter().map(|category| html! {
                    <SkillCategoryCard title={category.title} skills={category.skills} />
                }) }
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    let mut role_tag_index = 0;

    let items = EXPERIENCE.iter().enumerate().map(|(index, experience)| {
        let tags = experience
            .roles
            .iter()
            .map(|role| {
                let tag = html! { <RoleTag label={*role} index={role_tag_index} /> };
                role_tag_index += 1;
                tag
            })
            .collect::<Html>();

        html! {
            <ExperienceItem index={index}>
                <div class="experience-header">
                    <h3>{experience.title}</h3>
                    <span class="experience-period">{experience.period}</span>
                </div>
                <p class="experience-organization">{experience.organization}</p>
                <ul class="experience-highlights">
                    { for experience.highlights.iter().map(|highlight| html! { <li>{*highlight}</li> }) }
                </ul>
                <div class="role-tags">{tags}</div>
            </ExperienceItem>
        }
    });

    html! {
        <section id="experience" class="section">
            <h2 class="section-title">{"Experience"}</h2>
            <div class="experience-timeline">
                { for items }
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    html! {
        <section id="education" class="section">
            <h2 class="section-title">{"Education"}</h2>
            <div class="education-grid">
                { for EDUCATION.iter().map(|education| html! {
                    <EducationCard degree={education.degree} school={education.school} period={education.period} />
                }) }
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id="contact" class="section">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <div class="contact-grid">
                { for CONTACTS.iter().map(|contact| html! {
                    <ContactCard label={contact.label} value={contact.value} href={contact.href} />
                }) }
            </div>
        </section>
    }
}

fn focus_ring_listener(document: &Document, event_type: &'static str, focused: bool) -> EventListener {
    EventListener::new(document, event_type, move |event| {
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        if element.matches(FOCUSABLE_SELECTOR).unwrap_or(false) {
            dom::apply_focus_ring(&element, focused);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<EffectsConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        let listeners = dom::document().map(|document| {
            [
                focus_ring_listener(&document, "focusin", true),
                focus_ring_listener(&document, "focusout", false),
            ]
        });

        move || drop(listeners)
    });

    html! {
        <ContextProvider<Rc<EffectsConfig>> context={props.config.clone()}>
            <NavBar />
            <main>
                <Hero />
                <AboutSection />
                <SkillsSection />
                <ExperienceSection />
                <EducationSection />
                <ContactSection />
            </main>
            <footer class="footer">
                <p>{format!("© {OWNER_NAME}. Built with Rust and Yew.")}</p>
            </footer>
            <ScrollTopButton />
            <ParticleField />
        </ContextProvider<Rc<EffectsConfig>>>
    }
}

pub fn run() {
    let config = dom::load_config();
    wasm_logger::init(wasm_logger::Config::new(config.log_level.as_level()));
    dom::print_console_greeting();

    let Some(root) = dom::document().and_then(|document| document.get_element_by_id("app")) else {
        log::warn!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();

    log_event(
        LogLevel::Info,
        "page_loaded",
        json!({ "preconnect_links": dom::count_preconnect_links() }),
    );
}
