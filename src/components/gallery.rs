use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::overlay::{use_overlay, Overlay, OverlayPhase};
use crate::scroll;

struct Photo {
    src: &'static str,
    caption: &'static str,
}

const PHOTOS: [Photo; 6] = [
    Photo { src: "/assets/gallery/lobby.jpg", caption: "The lobby and reading room" },
    Photo { src: "/assets/gallery/terrace.jpg", caption: "Breakfast terrace over the bay" },
    Photo { src: "/assets/gallery/suite.jpg", caption: "Amaranta suite at dusk" },
    Photo { src: "/assets/gallery/courtyard.jpg", caption: "Lemon courtyard" },
    Photo { src: "/assets/gallery/pool.jpg", caption: "Saltwater pool" },
    Photo { src: "/assets/gallery/coast.jpg", caption: "The coastal path below the hotel" },
];

/// Gallery grid with a click-to-enlarge lightbox. The lightbox closes from
/// its own button or a backdrop click; clicks on the image itself do
/// nothing.
#[function_component(Gallery)]
pub fn gallery() -> Html {
    let overlay = use_overlay();
    let selected = use_state(|| None::<usize>);

    // Body scrolling is frozen for the whole time the lightbox covers the
    // page, including the exit animation.
    {
        let phase = overlay.phase();
        use_effect_with_deps(
            move |phase| {
                scroll::lock_body_scroll(*phase != OverlayPhase::Closed);
                || ()
            },
            phase,
        );
    }

    let items = PHOTOS
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let overlay = overlay.clone();
            let selected = selected.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                selected.set(Some(index));
                overlay.open();
            });
            html! {
                <figure class="gallery-item" {onclick}>
                    <img src={photo.src} alt={photo.caption} loading="lazy" />
                </figure>
            }
        })
        .collect::<Html>();

    let close = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.close())
    };
    let close_click = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.close())
    };

    // `selected` stays put while the overlay fades out so the image does
    // not vanish mid-animation.
    let lightbox = (*selected)
        .and_then(|index| PHOTOS.get(index))
        .map(|photo| {
            html! {
                <>
                    <button class="lightbox-close" onclick={close_click.clone()}>{"\u{00d7}"}</button>
                    <img src={photo.src} alt={photo.caption} />
                    <p class="lightbox-caption">{ photo.caption }</p>
                </>
            }
        })
        .unwrap_or_default();

    html! {
        <>
            <div class="gallery-grid">
                { items }
            </div>
            <Overlay phase={overlay.phase()} on_backdrop_click={close} class="lightbox">
                { lightbox }
            </Overlay>
        </>
    }
}
