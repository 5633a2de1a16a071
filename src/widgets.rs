use std::{cell::RefCell, collections::HashMap, rc::Rc};

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use serde_json::json;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::{
    config::EffectsConfig,
    dom,
    interactions::{
        card_entrance_delay_ms, card_entrance_style, tag_animation_delay, tag_transform, Tilt,
    },
    logging::{log_event, LogLevel},
    particles::{Particle, ParticleEmitter, FLOAT_KEYFRAMES, FLOAT_KEYFRAMES_ID},
    reveal::{RevealOptions, LOADED_CLASS, REVEALED_CLASS},
    scroll_top::{button_style, is_visible},
};

#[hook]
pub fn use_config() -> Rc<EffectsConfig> {
    use_context::<Rc<EffectsConfig>>().unwrap_or_default()
}

/// Calls `on_scroll` with the vertical scroll offset once on mount and then on
/// every window scroll event.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with((), move |_| {
        on_scroll.emit(dom::scroll_offset());

        let listener = window().map(|win| {
            EventListener::new(&win, "scroll", move |_| on_scroll.emit(dom::scroll_offset()))
        });

        move || drop(listener)
    });
}

/// True once the referenced element has intersected the viewport.
#[hook]
pub fn use_reveal(node: NodeRef, options: Option<RevealOptions>) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let observation = node.cast::<Element>().and_then(|element| {
                dom::observe_once(&element, options, move || revealed.set(true))
            });

            move || drop(observation)
        });
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct SkillCategoryProps {
    pub title: AttrValue,
    pub skills: &'static [&'static str],
}

#[function_component(SkillCategoryCard)]
pub fn skill_category_card(props: &SkillCategoryProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), Some(config.reveal));

    html! {
        <div ref={node} class={classes!("skill-category", revealed.then_some(REVEALED_CLASS))}>
            <h3>{props.title.clone()}</h3>
            <div class="skill-tags">
                { for props.skills.iter().map(|skill| html! { <SkillTag label={*skill} /> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillTagProps {
    pub label: AttrValue,
}

#[function_component(SkillTag)]
pub fn skill_tag(props: &SkillTagProps) -> Html {
    let hovered = use_state_eq(|| None::<bool>);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(true)))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(false)))
    };

    let style = (*hovered).map(|hovered| format!("transform: {};", tag_transform(hovered)));

    html! {
        <span class="skill-tag" style={style} {onmouseenter} {onmouseleave}>
            {props.label.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleTagProps {
    pub label: AttrValue,
    /// Position among all role tags of the page.
    pub index: usize,
}

#[function_component(RoleTag)]
pub fn role_tag(props: &RoleTagProps) -> Html {
    let config = use_config();
    let style = format!(
        "animation-delay: {};",
        tag_animation_delay(props.index, config.tag_stagger_seconds)
    );

    html! {
        <span class={classes!("role-tag", REVEALED_CLASS)} style={style}>{props.label.clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceItemProps {
    pub index: usize,
    pub children: Html,
}

/// Revealed on scroll; its inner card slides in after a per-index delay.
#[function_component(ExperienceItem)]
pub fn experience_item(props: &ExperienceItemProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), Some(config.reveal));
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        let delay = card_entrance_delay_ms(props.index, config.card_stagger_ms);
        use_effect_with((), move |_| {
            let timeout = Timeout::new(delay, move || entered.set(true));
            move || drop(timeout)
        });
    }

    html! {
        <div ref={node} class={classes!("experience-item", revealed.then_some(REVEALED_CLASS))}>
            <article class="experience-card" style={card_entrance_style(*entered)}>
                {props.children.clone()}
            </article>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EducationCardProps {
    pub degree: AttrValue,
    pub school: AttrValue,
    pub period: AttrValue,
}

#[function_component(EducationCard)]
pub fn education_card(props: &EducationCardProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), Some(config.reveal));

    html! {
        <div ref={node} class={classes!("education-card", revealed.then_some(REVEALED_CLASS))}>
            <h3>{props.degree.clone()}</h3>
            <p class="education-school">{props.school.clone()}</p>
            <p class="education-period">{props.period.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub href: AttrValue,
}

#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), Some(config.reveal));
    let transform = use_state_eq(|| None::<String>);

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        let divisor = config.tilt_divisor;
        Callback::from(move |event: MouseEvent| {
            let Some(card) = node.cast::<Element>() else {
                return;
            };

            let tilt = Tilt::from_pointer(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                dom::element_rect(&card),
                divisor,
            );
            transform.set(Some(tilt.transform()));
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| {
            transform.set(Some(Tilt::neutral_transform().to_string()));
        })
    };

    let style = (*transform)
        .as_ref()
        .map(|transform| format!("transform: {transform};"));

    html! {
        <a
            ref={node}
            class={classes!("contact-card", revealed.then_some(REVEALED_CLASS))}
            href={props.href.clone()}
            style={style}
            {onmousemove}
            {onmouseleave}
        >
            <h3>{props.label.clone()}</h3>
            <p>{props.value.clone()}</p>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose `src` is only assigned once it scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_reveal(node.clone(), None);

    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), loaded.then_some(LOADED_CLASS))}
            data-src={props.src.clone()}
            src={loaded.then(|| props.src.clone())}
            alt={props.alt.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub primary: bool,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = {
        let label = props.label.clone();
        Callback::from(move |_: MouseEvent| {
            log_event(
                LogLevel::Info,
                "cta_clicked",
                json!({ "label": label.as_str() }),
            );
        })
    };

    let variant = if props.primary { "btn-primary" } else { "btn-secondary" };

    html! {
        <a class={classes!("btn", variant)} href={props.href.clone()} {onclick}>
            {props.label.clone()}
        </a>
    }
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let config = use_config();
    let visible = use_state_eq(|| false);
    let hovered = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let threshold = config.scroll_top_threshold;
        use_window_scroll(Callback::from(move |offset: f64| {
            visible.set(is_visible(offset, threshold));
        }));
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let Some(body) = dom::body() else {
        return Html::default();
    };

    yew::create_portal(
        html! {
            <button
                class="scroll-top-btn"
                type="button"
                aria-label="Scroll to top"
                style={button_style(*visible, *hovered)}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                {"↑"}
            </button>
        },
        body.into(),
    )
}

#[derive(Default)]
struct ParticleLayer {
    particles: Vec<Particle>,
}

enum ParticleAction {
    Spawned(Particle),
    Expired(u64),
}

impl Reducible for ParticleLayer {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut particles = self.particles.clone();

        match action {
            ParticleAction::Spawned(particle) => particles.push(particle),
            ParticleAction::Expired(id) => {
                if !particles.iter().any(|particle| particle.id == id) {
                    return self;
                }
                particles.retain(|particle| particle.id != id);
            }
        }

        Rc::new(Self { particles })
    }
}

#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let config = use_config();
    let layer = use_reducer(ParticleLayer::default);

    {
        let dispatcher = layer.dispatcher();
        let timings = config.particles;
        use_effect_with((), move |_| {
            dom::inject_stylesheet(FLOAT_KEYFRAMES_ID, FLOAT_KEYFRAMES);

            let emitter = RefCell::new(ParticleEmitter::new(timings));
            let removals: Rc<RefCell<HashMap<u64, Timeout>>> = Rc::default();

            let interval = {
                let removals = removals.clone();
                Interval::new(timings.interval_ms, move || {
                    let now = js_sys::Date::now();
                    let mut emitter = emitter.borrow_mut();
                    let mut removals = removals.borrow_mut();

                    // Late removal timers are settled here and cancelled.
                    for id in emitter.drain_expired(now) {
                        removals.remove(&id);
                        dispatcher.dispatch(ParticleAction::Expired(id));
                    }

                    let particle = emitter.spawn(now, dom::viewport(), js_sys::Math::random);
                    let id = particle.id;
                    let expire = dispatcher.clone();
                    removals.insert(
                        id,
                        Timeout::new(timings.lifetime_ms, move || {
                            expire.dispatch(ParticleAction::Expired(id));
                        }),
                    );
                    dispatcher.dispatch(ParticleAction::Spawned(particle));
                })
            };

            move || {
                drop(interval);
                removals.borrow_mut().clear();
            }
        });
    }

    let Some(body) = dom::body() else {
        return Html::default();
    };

    yew::create_portal(
        html! {
            <>
                { for layer.particles.iter().map(|particle| html! {
                    <div key={particle.id} class="particle" style={particle.style()}></div>
                }) }
            </>
        },
        body.into(),
    )
}
