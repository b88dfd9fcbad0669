use leptos::prelude::*;

use crate::{
    motion::{Entrance, EASE, NAV_STAGGER},
    section::Section,
};

use super::page::PageContext;

const DESKTOP_LINK: Entrance = Entrance::rise(20, 600, 0);
const MOBILE_LINK: Entrance = Entrance::slide(-20, 300, 0);

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    let nav_class = move || {
        let variant = if ctx.elevated.get() {
            "bg-white/70 backdrop-blur-xl border-b border-white/20 shadow-lg shadow-black/5"
        } else {
            "bg-transparent"
        };
        format!("fixed top-0 w-full z-50 transition-all duration-500 {variant}")
    };
    let nav_style = move || {
        let y = if ctx.loaded.get() { "0" } else { "-100px" };
        format!("transform: translateY({y}); transition: transform 0.8s {EASE};")
    };

    view! {
        <nav class=nav_class style=nav_style>
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-xl font-bold text-gray-900 animate-pulse">
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Portfolio"
                        </span>
                    </div>
                    <div class="hidden md:flex items-center space-x-8">
                        {Section::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, section)| {
                                let entrance = DESKTOP_LINK.staggered(i, NAV_STAGGER);
                                view! {
                                    <button
                                        class="relative text-gray-600 hover:text-gray-900 transition-all duration-300 group"
                                        style=move || entrance.style(ctx.loaded.get())
                                        on:click=move |_| ctx.navigate(section)
                                    >
                                        {section.label()}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-blue-600 to-purple-600 group-hover:w-full transition-all duration-300" />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <MenuButton />
                </div>
                <MobileMenu />
            </div>
        </nav>
    }
}

#[component]
fn MenuButton() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let bar = move |base: &'static str, open: &'static str| {
        move || {
            if ctx.menu_open.get() {
                format!("{base} {open}")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <button
            class="md:hidden relative z-10"
            aria-label="Toggle menu"
            on:click=move |_| ctx.toggle_menu()
        >
            <div class="w-6 h-6 relative">
                <span class=bar(
                    "absolute top-0 left-0 w-full h-0.5 bg-gray-900 transition-all duration-300",
                    "rotate-45 top-2.5",
                ) />
                <span class=bar(
                    "absolute top-2.5 left-0 w-full h-0.5 bg-gray-900 transition-all duration-300",
                    "opacity-0",
                ) />
                <span class=bar(
                    "absolute top-5 left-0 w-full h-0.5 bg-gray-900 transition-all duration-300",
                    "-rotate-45 top-2.5",
                ) />
            </div>
        </button>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let panel_class = move || {
        let state = if ctx.menu_open.get() {
            "max-h-64 opacity-100"
        } else {
            "max-h-0 opacity-0"
        };
        format!("md:hidden transition-all duration-500 overflow-hidden {state}")
    };

    view! {
        <div class=panel_class>
            <div class="mt-4 pb-4 border-t border-white/20 bg-white/50 backdrop-blur-xl rounded-2xl p-4 mx-4">
                <div class="flex flex-col space-y-4">
                    {Section::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(i, section)| {
                            let entrance = MOBILE_LINK.staggered(i, NAV_STAGGER);
                            view! {
                                <button
                                    class="text-left text-gray-600 hover:text-gray-900 transition-all duration-300 hover:translate-x-2"
                                    style=move || entrance.style(ctx.menu_open.get())
                                    on:click=move |_| ctx.navigate(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
