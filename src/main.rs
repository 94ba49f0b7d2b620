use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod scroll;
mod components {
    pub mod contact;
    pub mod counter;
    pub mod gallery;
    pub mod notification;
    pub mod overlay;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::notification::{use_notifier, NotificationProvider, Severity};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

/// Scroll depth past which the nav bar switches to its condensed style.
const NAV_SCROLL_THRESHOLD: f64 = 100.0;

fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

const LANGUAGES: [&str; 3] = ["EN", "IT", "FR"];

/// Anchor targets for the in-page navigation, in menu order.
const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("rooms", "Rooms"),
    ("amenities", "Amenities"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_lang = use_state(|| 0usize);
    let notifier = use_notifier();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let subscription = scroll::subscribe(Callback::from(move |scroll_y: f64| {
                is_scrolled.set(nav_scrolled(scroll_y));
            }));

            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = !*menu_open;
            menu_open.set(open);
            scroll::lock_body_scroll(open);
        })
    };

    let nav_links = NAV_SECTIONS.iter().map(|(section_id, label)| {
        let menu_open = menu_open.clone();
        let section_id = *section_id;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll::lock_body_scroll(false);
            scroll::scroll_to_section(section_id);
        });
        html! {
            <a href={format!("#{}", section_id)} class="nav-link" {onclick}>
                {*label}
            </a>
        }
    }).collect::<Html>();

    let lang_switcher = LANGUAGES.iter().enumerate().map(|(i, lang)| {
        let active_lang = active_lang.clone();
        let notifier = notifier.clone();
        let lang = *lang;
        let onclick = {
            let active_lang = active_lang.clone();
            Callback::from(move |_: MouseEvent| {
            active_lang.set(i);
            if i != 0 {
                notifier.notify(format!("{} translation coming soon!", lang), Severity::Success);
            }
        })
        };
        html! {
            <span class={classes!("lang", (*active_lang == i).then(|| "active"))} {onclick}>
                {lang}
            </span>
        }
    }).collect::<Html>();

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Hotel Amaranta"}
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_links }
                    <div class="lang-switcher">
                        { lang_switcher }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::nav_scrolled;

    #[test]
    fn nav_gains_scrolled_flag_past_threshold() {
        assert!(nav_scrolled(150.0));
        assert!(nav_scrolled(100.1));
    }

    #[test]
    fn nav_stays_plain_at_or_below_threshold() {
        assert!(!nav_scrolled(50.0));
        assert!(!nav_scrolled(100.0));
        assert!(!nav_scrolled(0.0));
    }
}
