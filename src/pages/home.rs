use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement, MouseEvent, Window};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::counter::CounterAnimator;
use crate::components::gallery::Gallery;
use crate::components::reveal::RevealController;
use crate::scroll;

/// Elements animated in on first visibility, in document order.
const REVEAL_SELECTORS: &str = "\
    .section-tag,
    .section-title,
    .about-text,
    .about-features,
    .room-card,
    .amenity-card,
    .gallery-item,
    .contact-item,
    .location-list li";

const PRELOADER_MS: u32 = 800;
const PARALLAX_RATE: f64 = 0.3;

/// Parallax only runs on viewports wider than this.
const PARALLAX_MIN_WIDTH: f64 = 768.0;

struct PageEffects {
    _reveal: Option<RevealController>,
    _counters: Option<CounterAnimator>,
    _parallax: Option<scroll::ScrollSubscription>,
}

impl PageEffects {
    fn none() -> Self {
        PageEffects {
            _reveal: None,
            _counters: None,
            _parallax: None,
        }
    }
}

// Each feature initializes on its own; a missing element disables that
// feature and nothing else.
fn init_effects() -> PageEffects {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, page effects disabled");
        return PageEffects::none();
    };
    let Some(document) = window.document() else {
        log::warn!("no document, page effects disabled");
        return PageEffects::none();
    };

    PageEffects {
        _reveal: Some(RevealController::install(&document, REVEAL_SELECTORS)),
        _counters: Some(CounterAnimator::install(&document, ".feature-number")),
        _parallax: init_parallax(&window, &document),
    }
}

fn init_parallax(window: &Window, document: &Document) -> Option<scroll::ScrollSubscription> {
    let hero = match document.query_selector(".hero-image") {
        Ok(Some(element)) => element.dyn_into::<HtmlElement>().ok()?,
        _ => {
            log::warn!("hero image missing, parallax skipped");
            return None;
        }
    };

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if width <= PARALLAX_MIN_WIDTH {
        return None;
    }

    Some(scroll::subscribe(Callback::from(move |scroll_y: f64| {
        let _ = hero.style().set_property(
            "transform",
            &format!("scale(1.1) translateY({}px)", scroll_y * PARALLAX_RATE),
        );
    })))
}

#[function_component(Home)]
pub fn home() -> Html {
    let preloader_done = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let preloader_done = preloader_done.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(PRELOADER_MS, move || {
                    preloader_done.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Reveal animations, counters and parallax attach after the first
    // render, once the sections below exist in the DOM.
    use_effect_with_deps(
        move |_| {
            let effects = init_effects();
            move || drop(effects)
        },
        (),
    );

    let cta_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("contact");
    });

    html! {
        <div class="home-page">
            <PageStyles />

            <div class={classes!("preloader", (*preloader_done).then(|| "loaded"))}>
                <span class="preloader-mark">{"HA"}</span>
            </div>

            // Hero
            <header class="hero">
                <div class="hero-backdrop">
                    <img class="hero-image" src="/assets/hero.jpg" alt="Hotel Amaranta above the bay" />
                </div>
                <div class="hero-content">
                    <h1>{"Hotel Amaranta"}</h1>
                    <p class="hero-tagline">{"A quiet house above the Ligurian sea"}</p>
                    <a href="#contact" class="hero-cta" onclick={cta_onclick}>{"Plan your stay"}</a>
                </div>
            </header>

            // About
            <section id="about" class="section">
                <span class="section-tag">{"The house"}</span>
                <h2 class="section-title">{"Slow mornings, long views"}</h2>
                <div class="about-text">
                    <p>{"Amaranta is a nineteenth-century villa folded into the cliffside,
                         ten minutes on foot from the harbour. Rooms face either the lemon
                         courtyard or the open water; all of them face the quiet."}</p>
                    <p>{"We keep things small on purpose. Breakfast is baked downstairs,
                         the cellar is stocked from growers we can name, and the front desk
                         answers at any hour."}</p>
                </div>
                <div class="about-features">
                    <div class="feature-item">
                        <span class="feature-number">{"48"}</span>
                        <span class="feature-label">{"Rooms & suites"}</span>
                    </div>
                    <div class="feature-item">
                        <span class="feature-number">{"12"}</span>
                        <span class="feature-label">{"Garden terraces"}</span>
                    </div>
                    <div class="feature-item">
                        <span class="feature-number">{"24/7"}</span>
                        <span class="feature-label">{"Concierge"}</span>
                    </div>
                </div>
            </section>

            // Rooms
            <section id="rooms" class="section section-alt">
                <span class="section-tag">{"Stay"}</span>
                <h2 class="section-title">{"Rooms"}</h2>
                <div class="room-grid">
                    <RoomCard
                        name="Courtyard Room"
                        img="/assets/rooms/courtyard.jpg"
                        price="from €140 / night"
                        blurb="Opens onto the lemon courtyard. Stone floors, a writing desk, and the fountain for an alarm clock."
                    />
                    <RoomCard
                        name="Sea-View Room"
                        img="/assets/rooms/seaview.jpg"
                        price="from €190 / night"
                        blurb="A juliet balcony over the bay. The light at seven in the evening does most of the decorating."
                    />
                    <RoomCard
                        name="Amaranta Suite"
                        img="/assets/rooms/suite.jpg"
                        price="from €290 / night"
                        blurb="The old master bedroom: a private terrace, a deep bath, and the best corner of the view."
                    />
                </div>
            </section>

            // Amenities
            <section id="amenities" class="section">
                <span class="section-tag">{"Around the house"}</span>
                <h2 class="section-title">{"Amenities"}</h2>
                <div class="amenity-grid">
                    <AmenityCard title="Saltwater pool" blurb="Carved into the terrace rock, heated in the shoulder seasons." />
                    <AmenityCard title="Breakfast terrace" blurb="Served until late morning. Nobody is rushed off a table." />
                    <AmenityCard title="Library" blurb="Two rooms of other guests' favourite books, left behind on purpose." />
                    <AmenityCard title="Bicycle hire" blurb="The coastal road is flat for the first ten kilometres. After that, you're on your own." />
                    <AmenityCard title="Transfers" blurb="Fixed-price cars to and from the airport, arranged at the desk." />
                    <AmenityCard title="Wine cellar" blurb="Tastings on Thursday evenings, or whenever three guests ask nicely." />
                </div>
            </section>

            // Gallery
            <section id="gallery" class="section section-alt">
                <span class="section-tag">{"In pictures"}</span>
                <h2 class="section-title">{"Gallery"}</h2>
                <Gallery />
            </section>

            // Contact
            <section id="contact" class="section">
                <span class="section-tag">{"Write to us"}</span>
                <h2 class="section-title">{"Plan your stay"}</h2>
                <div class="contact-layout">
                    <div class="contact-side">
                        <div class="contact-item">
                            <h3>{"Address"}</h3>
                            <p>{"Via del Castellaro 12, Porto Lumera"}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Phone"}</h3>
                            <p>{"+39 0185 55 01 23"}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Email"}</h3>
                            <p>{"stay@hotelamaranta.it"}</p>
                        </div>
                        <ul class="location-list">
                            <li>{"5 minutes on foot to the harbour"}</li>
                            <li>{"12 minutes to the railway station"}</li>
                            <li>{"40 minutes to Genoa airport"}</li>
                            <li>{"2 minutes to the coastal path"}</li>
                        </ul>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <span>{"Hotel Amaranta — Porto Lumera"}</span>
                <span class="footer-fine">{"© 2025 Società Alberghiera Amaranta s.r.l."}</span>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RoomCardProps {
    name: &'static str,
    img: &'static str,
    price: &'static str,
    blurb: &'static str,
}

#[function_component(RoomCard)]
fn room_card(props: &RoomCardProps) -> Html {
    html! {
        <article class="room-card">
            <img src={props.img} alt={props.name} loading="lazy" />
            <div class="room-card-body">
                <h3>{ props.name }</h3>
                <p>{ props.blurb }</p>
                <span class="room-price">{ props.price }</span>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct AmenityCardProps {
    title: &'static str,
    blurb: &'static str,
}

#[function_component(AmenityCard)]
fn amenity_card(props: &AmenityCardProps) -> Html {
    html! {
        <div class="amenity-card">
            <h3>{ props.title }</h3>
            <p>{ props.blurb }</p>
        </div>
    }
}

#[function_component(PageStyles)]
fn page_styles() -> Html {
    html! {
        <style>
            {r#"
            :root {
                --color-bg: #faf7f2;
                --color-ink: #26221c;
                --color-muted: #6f675c;
                --color-accent: #9c5c44;
                --color-accent-dark: #7c4532;
                --color-card: #ffffff;
                --color-error: #b3402f;
                --font-display: Georgia, 'Times New Roman', serif;
                --font-body: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            }

            * { box-sizing: border-box; margin: 0; }

            body {
                background: var(--color-bg);
                color: var(--color-ink);
                font-family: var(--font-body);
                line-height: 1.6;
            }

            h1, h2, h3 { font-family: var(--font-display); font-weight: 500; }

            /* Preloader */
            .preloader {
                position: fixed;
                inset: 0;
                background: var(--color-bg);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 20000;
                transition: opacity 0.6s ease, visibility 0.6s ease;
            }
            .preloader.loaded {
                opacity: 0;
                visibility: hidden;
                pointer-events: none;
            }
            .preloader-mark {
                font-family: var(--font-display);
                font-size: 3rem;
                letter-spacing: 0.3em;
                color: var(--color-accent);
            }

            /* Navigation */
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 1000;
                padding: 1.4rem 2rem;
                transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(250, 247, 242, 0.95);
                padding: 0.8rem 2rem;
                box-shadow: 0 2px 16px rgba(38, 34, 28, 0.08);
            }
            .nav-content {
                max-width: 1100px;
                margin: 0 auto;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-family: var(--font-display);
                font-size: 1.3rem;
                letter-spacing: 0.08em;
                color: var(--color-ink);
                text-decoration: none;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 1.6rem;
            }
            .nav-link {
                color: var(--color-ink);
                text-decoration: none;
                font-size: 0.95rem;
            }
            .nav-link:hover { color: var(--color-accent); }
            .lang-switcher {
                display: flex;
                gap: 0.6rem;
                font-size: 0.8rem;
                color: var(--color-muted);
            }
            .lang-switcher .lang { cursor: pointer; }
            .lang-switcher .lang.active {
                color: var(--color-accent);
                border-bottom: 1px solid var(--color-accent);
            }
            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 6px;
            }
            .burger-menu span {
                width: 24px;
                height: 2px;
                background: var(--color-ink);
                transition: transform 0.3s ease, opacity 0.3s ease;
            }
            .burger-menu.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
            .burger-menu.active span:nth-child(2) { opacity: 0; }
            .burger-menu.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

            /* Hero */
            .hero {
                position: relative;
                height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                text-align: center;
            }
            .hero-backdrop {
                position: absolute;
                inset: 0;
                overflow: hidden;
            }
            .hero-image {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transform: scale(1.1);
                filter: brightness(0.7);
            }
            .hero-content {
                position: relative;
                color: #fff;
                padding: 0 2rem;
            }
            .hero-content h1 {
                font-size: clamp(2.4rem, 6vw, 4.2rem);
                letter-spacing: 0.04em;
            }
            .hero-tagline {
                margin-top: 0.8rem;
                font-size: 1.15rem;
                opacity: 0.9;
            }
            .hero-cta {
                display: inline-block;
                margin-top: 2rem;
                padding: 0.9rem 2.4rem;
                border: 1px solid rgba(255, 255, 255, 0.8);
                color: #fff;
                text-decoration: none;
                letter-spacing: 0.1em;
                font-size: 0.85rem;
                text-transform: uppercase;
                transition: background 0.3s ease;
            }
            .hero-cta:hover { background: rgba(255, 255, 255, 0.15); }

            /* Sections */
            .section {
                max-width: 1100px;
                margin: 0 auto;
                padding: 6rem 2rem;
            }
            .section-alt { background: #f3eee6; max-width: none; }
            .section-alt > * { max-width: 1100px; margin-left: auto; margin-right: auto; }
            .section-tag {
                display: block;
                text-transform: uppercase;
                letter-spacing: 0.25em;
                font-size: 0.75rem;
                color: var(--color-accent);
                margin-bottom: 0.6rem;
            }
            .section-title {
                font-size: clamp(1.8rem, 4vw, 2.6rem);
                margin-bottom: 2.4rem;
            }
            .about-text {
                max-width: 620px;
                display: grid;
                gap: 1rem;
                color: var(--color-muted);
            }

            .about-features {
                display: flex;
                gap: 3.5rem;
                margin-top: 3rem;
                flex-wrap: wrap;
            }
            .feature-item { display: flex; flex-direction: column; }
            .feature-number {
                font-family: var(--font-display);
                font-size: 2.6rem;
                color: var(--color-accent);
            }
            .feature-label {
                font-size: 0.85rem;
                text-transform: uppercase;
                letter-spacing: 0.12em;
                color: var(--color-muted);
            }

            /* Rooms */
            .room-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 2rem;
            }
            .room-card {
                background: var(--color-card);
                overflow: hidden;
                box-shadow: 0 8px 28px rgba(38, 34, 28, 0.08);
            }
            .room-card img {
                width: 100%;
                height: 220px;
                object-fit: cover;
                display: block;
            }
            .room-card-body { padding: 1.4rem 1.6rem 1.8rem; }
            .room-card-body p { color: var(--color-muted); font-size: 0.95rem; margin: 0.6rem 0 1rem; }
            .room-price {
                font-size: 0.85rem;
                letter-spacing: 0.08em;
                text-transform: uppercase;
                color: var(--color-accent);
            }

            /* Amenities */
            .amenity-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
            }
            .amenity-card {
                background: var(--color-card);
                padding: 1.6rem;
                border-top: 2px solid var(--color-accent);
            }
            .amenity-card p { color: var(--color-muted); font-size: 0.92rem; margin-top: 0.5rem; }

            /* Gallery */
            .gallery-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 1rem;
            }
            .gallery-item {
                margin: 0;
                cursor: pointer;
                overflow: hidden;
            }
            .gallery-item img {
                width: 100%;
                height: 200px;
                object-fit: cover;
                display: block;
                transition: transform 0.4s ease;
            }
            .gallery-item:hover img { transform: scale(1.05); }

            /* Overlay / lightbox */
            @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
            @keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
            .overlay {
                position: fixed;
                inset: 0;
                background: rgba(23, 20, 16, 0.94);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 10000;
                padding: 2rem;
                animation: fadeIn 0.3s ease;
            }
            .overlay.closing { animation: fadeOut 0.3s ease forwards; }
            .overlay-content { max-width: 90vw; max-height: 90vh; position: relative; }
            .lightbox .overlay-content img {
                max-width: 100%;
                max-height: 80vh;
                object-fit: contain;
                display: block;
            }
            .lightbox-caption {
                text-align: center;
                color: #f3eee6;
                margin-top: 1rem;
                font-family: var(--font-display);
                font-size: 1.2rem;
            }
            .lightbox-close {
                position: absolute;
                top: -2.4rem;
                right: 0;
                background: none;
                border: none;
                color: #f3eee6;
                font-size: 2rem;
                cursor: pointer;
                line-height: 1;
            }

            /* Notifications */
            @keyframes slideIn {
                from { transform: translateX(100%); opacity: 0; }
                to { transform: translateX(0); opacity: 1; }
            }
            @keyframes slideOut {
                from { transform: translateX(0); opacity: 1; }
                to { transform: translateX(100%); opacity: 0; }
            }
            .notification-stack {
                position: fixed;
                bottom: 2rem;
                right: 2rem;
                display: flex;
                flex-direction: column;
                gap: 0.8rem;
                z-index: 10000;
            }
            .notification {
                display: flex;
                align-items: center;
                gap: 1rem;
                padding: 1rem 1.6rem;
                color: var(--color-bg);
                font-family: var(--font-body);
                animation: slideIn 0.3s ease;
            }
            .notification.closing { animation: slideOut 0.3s ease forwards; }
            .notification-success { background: var(--color-accent); }
            .notification-error { background: var(--color-error); }
            .notification-close {
                background: none;
                border: none;
                color: inherit;
                font-size: 1.2rem;
                cursor: pointer;
                padding: 0;
                line-height: 1;
            }

            /* Contact */
            .contact-layout {
                display: grid;
                grid-template-columns: 1fr 1.4fr;
                gap: 3rem;
            }
            .contact-item h3 { font-size: 1.05rem; }
            .contact-item p { color: var(--color-muted); margin: 0.2rem 0 1.2rem; }
            .location-list {
                list-style: none;
                padding: 0;
                margin-top: 1.6rem;
                color: var(--color-muted);
                font-size: 0.92rem;
            }
            .location-list li {
                padding: 0.4rem 0;
                border-bottom: 1px solid rgba(38, 34, 28, 0.1);
            }
            .contact-form { display: grid; gap: 1.1rem; }
            .form-row { display: flex; flex-direction: column; gap: 0.3rem; }
            .form-row-split {
                flex-direction: row;
                gap: 1rem;
            }
            .form-row-split > div {
                flex: 1;
                display: flex;
                flex-direction: column;
                gap: 0.3rem;
            }
            .contact-form label {
                font-size: 0.8rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: var(--color-muted);
            }
            .contact-form input,
            .contact-form textarea {
                padding: 0.7rem 0.9rem;
                border: 1px solid rgba(38, 34, 28, 0.2);
                background: var(--color-card);
                font-family: inherit;
                font-size: 0.95rem;
            }
            .form-submit {
                justify-self: start;
                padding: 0.9rem 2.4rem;
                background: var(--color-accent);
                color: #fff;
                border: none;
                cursor: pointer;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                font-size: 0.85rem;
                transition: background 0.3s ease;
            }
            .form-submit:hover { background: var(--color-accent-dark); }

            /* Footer */
            .footer {
                padding: 2.5rem 2rem;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 0.3rem;
                background: var(--color-ink);
                color: rgba(250, 247, 242, 0.85);
                font-size: 0.9rem;
            }
            .footer-fine { font-size: 0.75rem; opacity: 0.6; }

            @media (max-width: 768px) {
                .burger-menu { display: flex; }
                .nav-right {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: min(75vw, 320px);
                    background: var(--color-bg);
                    flex-direction: column;
                    justify-content: center;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                    box-shadow: -8px 0 30px rgba(38, 34, 28, 0.15);
                }
                .nav-right.mobile-menu-open { transform: translateX(0); }
                .contact-layout { grid-template-columns: 1fr; }
            }
            "#}
        </style>
    }
}
