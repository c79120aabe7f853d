use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, MouseEvent,
    SubmitEvent,
};
use yew::prelude::*;

use crate::accordion::{Presence, DETAILS_EXIT_MS};
use crate::browser::{self, RevealObserver, REVEAL_KEY_ATTR};
use crate::carousel::{Carousel, CarouselConfig};
use crate::config::{EngineConfig, RelayConfig};
use crate::contact::{deliver, ContactPayload, SubmitOutcome};
use crate::content::{
    ABOUT_PARAGRAPHS, EDUCATION, EXPERIENCES, HERO, LANGUAGES, SITE, SKILLS, SOCIAL_LINKS,
    TESTIMONIALS, TOOLS,
};
use crate::context::{MotionFrame, PageContext};
use crate::diagnostics::{Diagnostics, LogLevel};
use crate::relay::EmailJsRelay;
use crate::reveal::{
    Entrance, MeterFill, BULLET_STAGGER, GROUP_STAGGER, HERO_ACTIONS, HERO_BADGE, HERO_CAPTION,
    HERO_SCROLL_HINT, HERO_TITLE, NAVBAR_ENTRANCE, OVERLAY_STAGGER,
};
use crate::section::SectionId;
use crate::telemetry::{PointerSample, ScrollSample, Telemetry};
use crate::visibility::Transition;

const FALLBACK_FRAME_SECONDS: f64 = 1.0 / 60.0;
const CURSOR_GLOW_RADIUS_PX: f64 = 200.0;

#[derive(Default, PartialEq)]
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RevealKind {
    Section,
    Widget,
}

impl RevealKind {
    fn threshold(self, config: &EngineConfig) -> f64 {
        match self {
            Self::Section => config.section_threshold,
            Self::Widget => config.widget_threshold,
        }
    }
}

struct RevealObservers {
    section: RevealObserver,
    widget: RevealObserver,
}

impl RevealObservers {
    fn new(context: &Rc<RefCell<PageContext>>, bump: &Callback<()>) -> Option<Self> {
        Some(Self {
            section: reveal_observer(RevealKind::Section, context, bump)?,
            widget: reveal_observer(RevealKind::Widget, context, bump)?,
        })
    }

    fn get(&self, kind: RevealKind) -> &RevealObserver {
        match kind {
            RevealKind::Section => &self.section,
            RevealKind::Widget => &self.widget,
        }
    }
}

fn reveal_observer(
    kind: RevealKind,
    context: &Rc<RefCell<PageContext>>,
    bump: &Callback<()>,
) -> Option<RevealObserver> {
    let threshold = kind.threshold(context.borrow().config());
    let context = Rc::clone(context);
    let bump = bump.clone();

    RevealObserver::new(threshold, move |key, sample| {
        let transition = context.borrow_mut().observe(key, sample);
        let seen = context.borrow().is_revealed(key);
        if transition == Transition::Revealed {
            bump.emit(());
        }
        seen
    })
}

/// Equality follows the revision so consumers re-render on change.
#[derive(Clone)]
struct PageHandle {
    context: Rc<RefCell<PageContext>>,
    observers: Rc<Option<RevealObservers>>,
    diagnostics: Diagnostics,
    bump: Callback<()>,
    revision: u64,
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && Rc::ptr_eq(&self.context, &other.context)
    }
}

impl PageHandle {
    fn read<R>(&self, f: impl FnOnce(&PageContext) -> R) -> R {
        f(&self.context.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut PageContext) -> R) -> R {
        let result = f(&mut self.context.borrow_mut());
        self.bump.emit(());
        result
    }

    fn navigate(&self, target: SectionId) {
        let request = self.update(|ctx| ctx.navigate(target));
        self.diagnostics.event(
            LogLevel::Debug,
            "nav.navigate",
            json!({ "target": request.target.as_str() }),
        );
        browser::scroll_to_section(request.target);
    }
}

#[hook]
fn use_page() -> PageHandle {
    use_context::<PageHandle>().expect("page context is provided by App")
}

#[hook]
fn use_reveal(key: AttrValue, kind: RevealKind) -> (NodeRef, bool) {
    let page = use_page();
    let node = use_node_ref();

    {
        let page = page.clone();
        let node = node.clone();
        use_effect_with(key.clone(), move |key| {
            let threshold = page.read(|ctx| kind.threshold(ctx.config()));
            page.context.borrow_mut().track(key, threshold);

            let mut observed: Option<Element> = None;
            match ((*page.observers).as_ref(), node.cast::<Element>()) {
                (Some(observers), Some(element)) => {
                    let _ = element.set_attribute(REVEAL_KEY_ATTR, key);
                    observers.get(kind).observe(&element);
                    observed = Some(element);
                }
                _ => page.update(|ctx| ctx.fail_open()),
            }

            let observers = Rc::clone(&page.observers);
            move || {
                if let (Some(observers), Some(element)) = ((*observers).as_ref(), observed) {
                    observers.get(kind).unobserve(&element);
                }
            }
        });
    }

    let revealed = page.read(|ctx| ctx.is_revealed(&key));
    (node, revealed)
}

struct FrameDriver {
    context: Rc<RefCell<PageContext>>,
    telemetry: RefCell<Telemetry>,
    pending: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    on_active: Callback<()>,
    on_motion: Callback<MotionFrame>,
    diagnostics: Diagnostics,
}

impl FrameDriver {
    fn new(
        context: Rc<RefCell<PageContext>>,
        on_active: Callback<()>,
        on_motion: Callback<MotionFrame>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            context,
            telemetry: RefCell::new(Telemetry::default()),
            pending: RefCell::new(None),
            last_timestamp: Cell::new(None),
            on_active,
            on_motion,
            diagnostics,
        }
    }

    fn record_scroll(self: &Rc<Self>, sample: ScrollSample) {
        if self.telemetry.borrow_mut().record_scroll(sample) {
            self.ensure_frame();
        }
    }

    fn record_pointer(self: &Rc<Self>, sample: PointerSample) {
        if self.telemetry.borrow_mut().record_pointer(sample) {
            self.ensure_frame();
        }
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.pending.borrow().is_some() {
            return;
        }
        let driver = Rc::clone(self);
        let frame = request_animation_frame(move |timestamp| driver.run_frame(timestamp));
        *self.pending.borrow_mut() = Some(frame);
    }

    fn run_frame(self: &Rc<Self>, timestamp: f64) {
        self.pending.borrow_mut().take();
        if !self.context.borrow().is_mounted() {
            return;
        }

        let elapsed = self
            .last_timestamp
            .get()
            .map(|last| ((timestamp - last) / 1_000.0).max(0.0))
            .unwrap_or(FALLBACK_FRAME_SECONDS);
        let input = self.telemetry.borrow_mut().take_frame();

        let (outcome, frame, active) = {
            let mut context = self.context.borrow_mut();
            let outcome = match input {
                Some(input) => context.apply_frame(input, &browser::measure_layout(), elapsed),
                None => context.advance(elapsed),
            };
            (outcome, context.motion_frame(), context.active_section())
        };

        if outcome.motion_changed {
            self.on_motion.emit(frame);
        }
        if outcome.active_changed {
            self.diagnostics.event(
                LogLevel::Debug,
                "nav.active_section",
                json!({ "section": active.as_str() }),
            );
            self.on_active.emit(());
        }

        if outcome.animating || self.telemetry.borrow().is_pending() {
            self.last_timestamp.set(Some(timestamp));
            self.ensure_frame();
        } else {
            self.last_timestamp.set(None);
        }
    }

    fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.last_timestamp.set(None);
    }
}

#[function_component(App)]
fn app() -> Html {
    let context = use_mut_ref(|| PageContext::mount(EngineConfig::from_build_env()));
    let revision = use_reducer(Revision::default);
    let diagnostics = Diagnostics::new(context.borrow().config().log_level);
    let motion = {
        let context = context.clone();
        use_state_eq(move || context.borrow().motion_frame())
    };

    let observers = {
        let context = context.clone();
        let dispatcher = revision.dispatcher();
        let diagnostics = diagnostics.clone();
        use_memo((), move |_| {
            let bump = Callback::from(move |_| dispatcher.dispatch(()));
            let observers = RevealObservers::new(&context, &bump);
            if observers.is_none() {
                diagnostics.event(LogLevel::Error, "reveal.observer_unavailable", json!({}));
                context.borrow_mut().fail_open();
            }
            observers
        })
    };

    {
        let context = context.clone();
        let dispatcher = revision.dispatcher();
        let on_motion = motion.setter();
        let diagnostics = diagnostics.clone();
        use_effect_with((), move |_| {
            let driver = Rc::new(FrameDriver::new(
                context.clone(),
                Callback::from(move |_| dispatcher.dispatch(())),
                Callback::from(move |frame| on_motion.set(frame)),
                diagnostics.clone(),
            ));
            driver.record_scroll(ScrollSample::new(browser::scroll_offset()));

            let scroll_driver = driver.clone();
            let pointer_driver = driver.clone();
            let resize_driver = driver.clone();
            let listeners: Vec<EventListener> = [
                browser::window_listener("scroll", move |_| {
                    scroll_driver.record_scroll(ScrollSample::new(browser::scroll_offset()));
                }),
                browser::window_listener("mousemove", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        pointer_driver.record_pointer(PointerSample {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                        });
                    }
                }),
                // Layout moves on resize without a scroll event.
                browser::window_listener("resize", move |_| {
                    resize_driver.record_scroll(ScrollSample::new(browser::scroll_offset()));
                }),
            ]
            .into_iter()
            .flatten()
            .collect();
            diagnostics.event(LogLevel::Debug, "page.mounted", json!({}));

            move || {
                drop(listeners);
                driver.cancel();
                context.borrow_mut().teardown();
                diagnostics.event(LogLevel::Debug, "page.teardown", json!({}));
            }
        });
    }

    let handle = PageHandle {
        context: context.clone(),
        observers: observers.clone(),
        diagnostics,
        bump: {
            let dispatcher = revision.dispatcher();
            Callback::from(move |_| dispatcher.dispatch(()))
        },
        revision: revision.0,
    };

    html! {
        <ContextProvider<PageHandle> context={handle}>
            <ContextProvider<MotionFrame> context={*motion}>
                <CursorGlow />
                <ScrollProgress />
                <Navbar />
                <main id="content">
                    <Hero />
                    <About />
                    <ExperienceSection />
                    <Skills />
                    <EducationSection />
                    <Testimonials />
                    <ContactSection />
                </main>
                <Footer />
            </ContextProvider<MotionFrame>>
        </ContextProvider<PageHandle>>
    }
}

#[hook]
fn use_motion() -> Option<MotionFrame> {
    use_context::<MotionFrame>()
}

#[function_component(CursorGlow)]
fn cursor_glow() -> Html {
    let pointer = use_motion()
        .map(|frame| frame.pointer)
        .unwrap_or_else(PointerSample::offscreen);
    let style = format!(
        "transform: translate3d({:.0}px, {:.0}px, 0);",
        pointer.x - CURSOR_GLOW_RADIUS_PX,
        pointer.y - CURSOR_GLOW_RADIUS_PX
    );

    html! { <div class="cursor-glow" style={style} aria-hidden="true" /> }
}

#[function_component(ScrollProgress)]
fn scroll_progress() -> Html {
    let progress = use_motion().map(|frame| frame.progress).unwrap_or(0.0);
    let style = format!("transform: scaleX({progress:.4});");

    html! { <div class="scroll-progress" style={style} aria-hidden="true" /> }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    target: SectionId,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    style: Option<AttrValue>,
    #[prop_or_default]
    children: Children,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let page = use_page();
    let onclick = {
        let target = props.target;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            page.navigate(target);
        })
    };

    html! {
        <a
            class={props.class.clone()}
            style={props.style.clone()}
            href={props.target.anchor()}
            onclick={onclick}
        >
            {props.children.clone()}
        </a>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let page = use_page();
    let entered = use_entered();
    let nav_scrolled = use_motion().map(|frame| frame.nav_scrolled).unwrap_or(false);
    let active = page.read(PageContext::active_section);
    let overlay = page.read(PageContext::overlay);

    let on_toggle = {
        let page = page.clone();
        Callback::from(move |_| {
            page.update(|ctx| ctx.toggle_overlay());
        })
    };

    html! {
        <>
            <header
                class={classes!("navbar", nav_scrolled.then_some("is-scrolled"))}
                style={NAVBAR_ENTRANCE.style(entered)}
            >
                <nav class="navbar-inner" aria-label="Primary">
                    <NavLink target={SectionId::Home} class="brand">{SITE.owner}</NavLink>
                    <ul class="nav-links">
                        { for SectionId::ALL.into_iter().map(|id| html! {
                            <li key={id.as_str()}>
                                <NavLink
                                    target={id}
                                    class={classes!("nav-link", (id == active).then_some("is-active"))}
                                >
                                    {id.label()}
                                    if id == active {
                                        <span class="nav-indicator" aria-hidden="true" />
                                    }
                                </NavLink>
                            </li>
                        }) }
                    </ul>
                    <button
                        class={classes!("menu-toggle", overlay.is_open().then_some("is-open"))}
                        type="button"
                        aria-label={overlay.toggle_label()}
                        aria-expanded={overlay.is_open().to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true" />
                        <span aria-hidden="true" />
                    </button>
                </nav>
            </header>
            // Outside the header: its backdrop filter traps fixed children.
            if overlay.is_open() {
                <OverlayMenu active={active} />
            }
        </>
    }
}

/// `false` on mount, `true` two frames later so the hidden pose is painted
/// before the transition starts.
#[hook]
fn use_entered() -> bool {
    let entered = use_state_eq(|| false);
    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            let frame = Rc::new(RefCell::new(None::<AnimationFrame>));
            let slot = Rc::clone(&frame);
            *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                let next = request_animation_frame(move |_| entered.set(true));
                *slot.borrow_mut() = Some(next);
            }));
            move || drop(frame.borrow_mut().take())
        });
    }
    *entered
}

#[derive(Properties, PartialEq)]
struct OverlayMenuProps {
    active: SectionId,
}

#[function_component(OverlayMenu)]
fn overlay_menu(props: &OverlayMenuProps) -> Html {
    let entered = use_entered();
    let styles = OVERLAY_STAGGER.styles(SectionId::ALL.len(), entered);

    html! {
        <div class="mobile-overlay" role="dialog" aria-label="Site navigation">
            <ul>
                { for SectionId::ALL.into_iter().zip(styles).map(|(id, style)| html! {
                    <li key={id.as_str()}>
                        <NavLink
                            target={id}
                            class={classes!("overlay-link", (id == props.active).then_some("is-active"))}
                            style={AttrValue::from(style)}
                        >
                            {id.label()}
                        </NavLink>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let page = use_page();
    let entered = use_entered();
    let hero = use_context::<MotionFrame>()
        .unwrap_or_else(|| page.read(PageContext::motion_frame))
        .hero;

    let on_contact = {
        let page = page.clone();
        Callback::from(move |_| page.navigate(SectionId::Contact))
    };
    let on_about = Callback::from(move |_| page.navigate(SectionId::About));

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-content" style={hero.content_style()}>
                <p class="hero-badge" style={HERO_BADGE.style(entered)}>
                    <span class="hero-badge-dot" aria-hidden="true" />
                    {SITE.tagline}
                </p>
                <h1 class="hero-title" style={HERO_TITLE.style(entered)}>
                    { for HERO.title_lines.iter().map(|line| html! {
                        <span class="hero-title-line">{*line}</span>
                    }) }
                </h1>
                <div class="hero-caption" style={hero.caption_style()}>
                    <p style={HERO_CAPTION.style(entered)}>
                        {HERO.caption_lead}
                        <strong>{HERO.caption_emphasis}</strong>
                        {HERO.caption_tail}
                    </p>
                </div>
                <div class="hero-actions" style={HERO_ACTIONS.style(entered)}>
                    <button class="button primary" type="button" onclick={on_contact}>
                        {"Get in Touch"}
                    </button>
                    <button class="button ghost" type="button" onclick={on_about}>
                        {"Explore More"}
                    </button>
                </div>
            </div>
            <div class="scroll-hint" style={HERO_SCROLL_HINT.style(entered)} aria-hidden="true">
                <span class="scroll-hint-label">{"Scroll"}</span>
                <span class="scroll-hint-line" />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RevealSectionProps {
    id: SectionId,
    title: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    delay: f64,
    #[prop_or_default]
    children: Children,
}

#[function_component(RevealSection)]
fn reveal_section(props: &RevealSectionProps) -> Html {
    let key = AttrValue::from(format!("section:{}", props.id.as_str()));
    let (node, revealed) = use_reveal(key, RevealKind::Section);
    let heading_id = format!("{}-heading", props.id.as_str());

    html! {
        <section
            id={props.id.as_str()}
            class={classes!("section", props.class.clone())}
            aria-labelledby={heading_id.clone()}
        >
            <div ref={node} class="section-inner" style={Entrance::section(props.delay).style(revealed)}>
                <h2 id={heading_id} class="section-title">{props.title.clone()}</h2>
                {props.children.clone()}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StaggerGroupProps {
    reveal_key: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Children,
}

#[function_component(StaggerGroup)]
fn stagger_group(props: &StaggerGroupProps) -> Html {
    let (node, revealed) = use_reveal(props.reveal_key.clone(), RevealKind::Section);
    let styles = GROUP_STAGGER.styles(props.children.len(), revealed);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().zip(styles).map(|(child, style)| html! {
                <div class="stagger-item" style={style}>{child}</div>
            }) }
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <RevealSection id={SectionId::About} title="About Me">
            <div class="about-grid">
                <img class="portrait" src={SITE.portrait_src} alt={SITE.owner} loading="lazy" />
                <StaggerGroup reveal_key="group:about" class="about-copy">
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <a class="button primary" href={SITE.cv_href} download="">{"Download CV"}</a>
                </StaggerGroup>
            </div>
        </RevealSection>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <RevealSection id={SectionId::Experience} title="Experience">
            <StaggerGroup reveal_key="group:experience" class="timeline">
                { for EXPERIENCES.iter().enumerate().map(|(index, entry)| html! {
                    <ExperienceEntry key={entry.key()} entry_key={entry.key()} index={index} />
                }) }
            </StaggerGroup>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceEntryProps {
    entry_key: AttrValue,
    index: usize,
}

#[function_component(ExperienceEntry)]
fn experience_entry(props: &ExperienceEntryProps) -> Html {
    let page = use_page();
    let open = page.read(|ctx| ctx.is_entry_open(&props.entry_key));
    let presence = use_state_eq(|| Presence::Absent.follow(open));

    {
        let presence = presence.clone();
        use_effect_with(open, move |&open| {
            let next = presence.follow(open);
            presence.set(next);
            let exit = (next == Presence::Exiting).then(|| {
                Timeout::new(DETAILS_EXIT_MS, move || presence.set(next.exit_finished()))
            });
            move || drop(exit)
        });
    }

    let Some(entry) = EXPERIENCES.get(props.index) else {
        return html! {};
    };
    let has_details = entry.has_details();

    let on_toggle = {
        let key = props.entry_key.clone();
        Callback::from(move |_| {
            page.update(|ctx| ctx.toggle_entry(&key, has_details));
        })
    };

    html! {
        <article class={classes!("timeline-entry", open.then_some("is-open"))}>
            <div class="timeline-head">
                <span class="timeline-period">{entry.period}</span>
                <h3>{entry.role}</h3>
                <p class="timeline-company">{entry.company}</p>
                if has_details {
                    <button
                        class="timeline-toggle"
                        type="button"
                        aria-expanded={open.to_string()}
                        onclick={on_toggle}
                    >
                        { if open { "Hide details" } else { "Show details" } }
                    </button>
                }
            </div>
            if open || presence.is_mounted() {
                <BulletList bullets={entry.bullets} closing={!open} />
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct BulletListProps {
    bullets: &'static [&'static str],
    #[prop_or_default]
    closing: bool,
}

#[function_component(BulletList)]
fn bullet_list(props: &BulletListProps) -> Html {
    let entered = use_entered();
    let styles = BULLET_STAGGER.styles(props.bullets.len(), entered);

    html! {
        <ul class={classes!("timeline-bullets", props.closing.then_some("is-closing"))}>
            { for props.bullets.iter().zip(styles).map(|(bullet, style)| html! {
                <li style={style}>{*bullet}</li>
            }) }
        </ul>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <RevealSection id={SectionId::Skills} title="Skills & Tools">
            <div class="skills-grid">
                <div class="skill-meters">
                    { for SKILLS.iter().map(|skill| html! {
                        <SkillMeter key={skill.label} label={skill.label} percent={skill.percent} />
                    }) }
                </div>
                <StaggerGroup reveal_key="group:tools" class="tool-tags">
                    { for TOOLS.iter().map(|tool| html! { <span class="tag">{*tool}</span> }) }
                </StaggerGroup>
            </div>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
struct SkillMeterProps {
    label: AttrValue,
    percent: u8,
}

#[function_component(SkillMeter)]
fn skill_meter(props: &SkillMeterProps) -> Html {
    let key = AttrValue::from(format!("skill:{}", props.label));
    let (node, revealed) = use_reveal(key, RevealKind::Widget);
    let fill = MeterFill {
        percent: props.percent,
    };

    html! {
        <div ref={node} class="skill-meter">
            <div class="skill-meter-label">
                <span>{props.label.clone()}</span>
                <span class="muted">{format!("{}%", props.percent)}</span>
            </div>
            <div class="skill-meter-track" role="presentation">
                <div class="skill-meter-fill" style={fill.style(revealed)} />
            </div>
        </div>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    html! {
        <RevealSection id={SectionId::Education} title="Education">
            <StaggerGroup reveal_key="group:education" class="education-list">
                { for EDUCATION.iter().map(|education| html! {
                    <article class="card">
                        <h3>{education.degree}</h3>
                        <p class="muted">{format!("{} · {}", education.school, education.year)}</p>
                        <p>{education.detail}</p>
                    </article>
                }) }
            </StaggerGroup>
            <StaggerGroup reveal_key="group:languages" class="language-list">
                { for LANGUAGES.iter().map(|language| html! {
                    <div class="language">
                        <span>{language.name}</span>
                        <span class="muted">{language.level}</span>
                    </div>
                }) }
            </StaggerGroup>
        </RevealSection>
    }
}

#[derive(Clone, PartialEq)]
struct CarouselState(Carousel);

enum CarouselAction {
    Autoplay,
    GoTo(usize),
    Resize(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            CarouselAction::Autoplay => next.autoplay_tick(),
            CarouselAction::GoTo(page) => {
                next.go_to(page);
            }
            CarouselAction::Resize(per_view) => next.set_per_view(per_view),
        }
        Rc::new(Self(next))
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let config = use_memo((), |_| CarouselConfig::default());
    let carousel = {
        let per_view = config.slides_per_view(browser::viewport_width());
        let looped = config.looped;
        use_reducer_eq(move || {
            CarouselState(Carousel::new(TESTIMONIALS.len(), per_view, looped))
        })
    };

    {
        let dispatcher = carousel.dispatcher();
        let config = config.clone();
        use_effect_with((), move |_| {
            let autoplay = {
                let dispatcher = dispatcher.clone();
                Interval::new(config.autoplay_ms, move || {
                    dispatcher.dispatch(CarouselAction::Autoplay)
                })
            };
            let resize = browser::window_listener("resize", move |_| {
                let per_view = config.slides_per_view(browser::viewport_width());
                dispatcher.dispatch(CarouselAction::Resize(per_view));
            });

            move || {
                drop(autoplay);
                drop(resize);
            }
        });
    }

    let state = &carousel.0;
    let current = state.current_page();
    let track_style = format!(
        "--slides-per-view: {}; --slide-gap: {}px;",
        state.per_view(),
        config.space_between_px
    );

    html! {
        <section
            id={SectionId::Testimonials.as_str()}
            class="section testimonials"
            aria-labelledby="testimonials-heading"
        >
            <div class="section-inner">
                <p class="section-eyebrow">{"05 / Client Reviews"}</p>
                <h2 id="testimonials-heading" class="section-title">{"What people say"}</h2>
                <div class="carousel" style={track_style}>
                    <div class="carousel-track">
                        { for state.visible_slides().into_iter().filter_map(|index| TESTIMONIALS.get(index)).map(|testimonial| html! {
                            <figure class="testimonial" key={testimonial.name}>
                                <blockquote>{testimonial.quote}</blockquote>
                                <figcaption>
                                    <span class="avatar" aria-hidden="true">{testimonial.initial()}</span>
                                    <span class="testimonial-name">{testimonial.name}</span>
                                    <span class="muted">{testimonial.title}</span>
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                    if config.clickable_pagination {
                        <div class="carousel-pagination">
                            { for (0..state.page_count()).map(|page| {
                                let dispatcher = carousel.dispatcher();
                                let onclick = Callback::from(move |_| dispatcher.dispatch(CarouselAction::GoTo(page)));
                                html! {
                                    <button
                                        key={page}
                                        type="button"
                                        class={classes!("bullet", (page == current).then_some("is-active"))}
                                        aria-label={format!("Go to slide {}", page + 1)}
                                        onclick={onclick}
                                    />
                                }
                            }) }
                        </div>
                    }
                </div>
            </div>
        </section>
    }
}

fn field_value<T: JsCast>(node: &NodeRef, read: impl FnOnce(&T) -> String) -> String {
    node.cast::<T>().map(|element| read(&element)).unwrap_or_default()
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let page = use_page();
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let relay = use_memo((), |_| EmailJsRelay::new(RelayConfig::from_build_env()));
    let revert_timer = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let page = page.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name = field_value::<HtmlInputElement>(&name_ref, HtmlInputElement::value);
            let email = field_value::<HtmlInputElement>(&email_ref, HtmlInputElement::value);
            let message =
                field_value::<HtmlTextAreaElement>(&message_ref, HtmlTextAreaElement::value);

            let payload = match ContactPayload::new(&name, &email, &message) {
                Ok(payload) => payload,
                Err(error) => {
                    page.diagnostics.event(
                        LogLevel::Debug,
                        "contact.invalid",
                        json!({ "error": error.to_string() }),
                    );
                    return;
                }
            };
            if !page.update(|ctx| ctx.begin_submit()) {
                page.diagnostics
                    .event(LogLevel::Debug, "contact.duplicate_dropped", json!({}));
                return;
            }

            let page = page.clone();
            let relay = relay.clone();
            let form_ref = form_ref.clone();
            let revert_timer = revert_timer.clone();
            spawn_local(async move {
                let outcome = deliver(&*relay, &payload, &page.diagnostics).await;
                if !page.read(PageContext::is_mounted) {
                    return;
                }
                page.update(|ctx| ctx.finish_submit(outcome, browser::now_ms()));
                if outcome != SubmitOutcome::Sent {
                    return;
                }

                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }

                let window_ms = page.read(|ctx| ctx.config().sent_window_ms);
                let timer_page = page.clone();
                // Replacing the slot cancels the previous revert, so the
                // latest success owns the deadline.
                *revert_timer.borrow_mut() = Some(Timeout::new(
                    u32::try_from(window_ms).unwrap_or(u32::MAX),
                    move || {
                        timer_page.update(|ctx| {
                            let now = browser::now_ms();
                            let deadline = ctx.submit_state().sent_until_ms().unwrap_or(now);
                            ctx.tick_submit(now.max(deadline))
                        });
                    },
                ));
            });
        })
    };

    let (in_flight, button_label) = page.read(|ctx| {
        let state = ctx.submit_state();
        (state.is_in_flight(), state.button_label())
    });

    html! {
        <RevealSection id={SectionId::Contact} title="Get In Touch">
            <div class="contact-grid">
                <div class="contact-details">
                    <p>{"Have a role or project in mind? Send a message and I will get back to you."}</p>
                    <p><span class="muted">{"Email "}</span><a href={format!("mailto:{}", SITE.email)}>{SITE.email}</a></p>
                    <p><span class="muted">{"Location "}</span>{SITE.location}</p>
                </div>
                <form ref={form_ref} class="contact-form" onsubmit={onsubmit}>
                    <label>
                        <span>{"Name"}</span>
                        <input ref={name_ref} name="name" type="text" required=true autocomplete="name" />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input ref={email_ref} name="email" type="email" required=true autocomplete="email" />
                    </label>
                    <label>
                        <span>{"Message"}</span>
                        <textarea ref={message_ref} name="message" rows="5" required=true />
                    </label>
                    <button class="button primary" type="submit" disabled={in_flight}>
                        {button_label}
                    </button>
                </form>
            </div>
        </RevealSection>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = use_memo((), |_| browser::current_year());

    html! {
        <footer class="footer">
            <ul class="social-links">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li>
                        <a href={link.href} target="_blank" rel="noopener noreferrer">
                            {link.label}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </li>
                }) }
            </ul>
            <p class="muted">{format!("© {} {}. All rights reserved.", *year, SITE.owner)}</p>
        </footer>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
