use leptos::{either::Either, prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::{
    content::{ContentError, PORTFOLIO},
    section::Section,
    viewport::{PointerPosition, ViewportController, ViewportSnapshot},
};

use super::{
    about::About, backdrop::Backdrop, contact::Contact, footer::Footer, hero::Hero, nav::NavBar,
    skills::Skills, work::Work,
};

/// Reactive view of the controller plus its actions, shared with every section.
#[derive(Clone, Copy)]
pub struct PageContext {
    controller: StoredValue<Option<ViewportController>, LocalStorage>,
    pub mounted: Memo<bool>,
    pub loaded: Memo<bool>,
    pub menu_open: Memo<bool>,
    pub email_copied: Memo<bool>,
    pub elevated: Memo<bool>,
    pub parallax: Memo<f64>,
    pub pointer: Memo<PointerPosition>,
}

impl PageContext {
    fn new(
        snapshot: ReadSignal<ViewportSnapshot>,
        controller: StoredValue<Option<ViewportController>, LocalStorage>,
    ) -> Self {
        Self {
            controller,
            mounted: Memo::new(move |_| snapshot.with(|s| s.mounted)),
            loaded: Memo::new(move |_| snapshot.with(|s| s.loaded)),
            menu_open: Memo::new(move |_| snapshot.with(|s| s.menu_open)),
            email_copied: Memo::new(move |_| snapshot.with(|s| s.email_copied)),
            elevated: Memo::new(move |_| snapshot.with(|s| s.nav_bar_is_elevated())),
            parallax: Memo::new(move |_| snapshot.with(|s| s.parallax_offset())),
            pointer: Memo::new(move |_| snapshot.with(|s| s.pointer_position)),
        }
    }

    pub fn navigate(&self, section: Section) {
        self.controller.with_value(|c| {
            if let Some(c) = c {
                c.navigate_to_section(section);
            }
        });
    }

    pub fn toggle_menu(&self) {
        self.controller.with_value(|c| {
            if let Some(c) = c {
                c.toggle_menu();
            }
        });
    }

    pub fn copy_email(&self, address: String) {
        let pending = self
            .controller
            .with_value(|c| c.as_ref().map(|c| c.copy_email_to_clipboard(address)));
        if let Some(pending) = pending {
            spawn_local(pending);
        }
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let portfolio = match PORTFOLIO.as_ref() {
        Ok(p) => p,
        Err(err) => {
            log::error!("{err}");
            return Either::Right(view! { <ContentNotice err=err.clone() /> });
        }
    };

    let (snapshot, set_snapshot) = signal(ViewportSnapshot::default());
    let controller = StoredValue::new_local(None::<ViewportController>);

    // effects only run in the browser, so the server renders the placeholder
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let ctrl =
                ViewportController::with_observer(super::browser::environment(), move |s| {
                    set_snapshot.set(*s)
                });
            ctrl.mount();
            controller.set_value(Some(ctrl));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_snapshot;

    on_cleanup(move || {
        controller.try_update_value(|c| {
            if let Some(c) = c.take() {
                c.teardown();
            }
        });
    });

    let ctx = PageContext::new(snapshot, controller);
    provide_context(ctx);

    Either::Left(view! {
        <Title text=portfolio.owner.name.clone() />
        <Show when=move || ctx.mounted.get() fallback=|| view! { <Placeholder /> }>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-white to-blue-50 relative overflow-x-hidden">
                <Backdrop />
                <NavBar />
                <Hero owner=&portfolio.owner />
                <About about=&portfolio.about />
                <Work projects=portfolio.projects.as_slice() />
                <Skills groups=portfolio.skill_groups.as_slice() />
                <Contact portfolio />
                <Footer name=portfolio.owner.name.clone() />
            </div>
        </Show>
    })
}

#[component]
fn Placeholder() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-white to-blue-50 flex items-center justify-center">
            <div class="animate-pulse text-gray-400">"Loading..."</div>
        </div>
    }
}

#[component]
fn ContentNotice(err: ContentError) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <pre class="whitespace-pre-wrap text-red-600">{err.to_string()}</pre>
        </div>
    }
}
