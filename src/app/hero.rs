use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::Owner,
    motion::{stagger_delay, Entrance},
    section::Section,
};

use super::page::PageContext;

const AVATAR: Entrance = Entrance::rise(50, 1000, 200);
const TITLE: Entrance = Entrance::rise(30, 800, 400);
const TAGLINE: Entrance = Entrance::rise(20, 800, 600);
const ACTIONS: Entrance = Entrance::rise(20, 800, 800);
const SCROLL_HINT: Entrance = Entrance::rise(20, 800, 1000);

const LETTER_STEP: Duration = Duration::from_millis(100);

#[component]
pub fn Hero(owner: &'static Owner) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let settled = move || ctx.loaded.get();

    let letters = owner
        .greeting
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { '\u{00A0}' } else { c };
            view! {
                <span
                    class="inline-block hover:scale-110 hover:-rotate-12 transition-all duration-300 cursor-default"
                    style=format!("animation-delay: {}ms", stagger_delay(i, LETTER_STEP).as_millis())
                >
                    {c.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <section class="min-h-screen flex items-center justify-center px-6 relative">
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <div
                    class="mb-8"
                    style=move || AVATAR.style_with_parallax(settled(), ctx.parallax.get())
                >
                    <div
                        class="w-32 h-32 mx-auto mb-8 rounded-full shadow-2xl shadow-blue-500/25 flex items-center justify-center relative overflow-visible group hover:scale-110 transition-all duration-500 avatar-gradient"
                    >
                        <div class="w-full h-full rounded-full overflow-hidden bg-gradient-to-br from-white/40 to-white/10 backdrop-blur-xl border border-white/20">
                            <img
                                src=owner.avatar.clone()
                                alt=format!("{} - {}", owner.name, owner.role)
                                width="128"
                                height="128"
                                class="w-full h-full object-cover rounded-full"
                            />
                        </div>
                        <div class="absolute -inset-4 rounded-full pointer-events-none">
                            <div class="absolute inset-0 rounded-full border-2 border-blue-400/30 animate-ping"></div>
                            <div
                                class="absolute inset-0 rounded-full border-2 border-purple-400/20 animate-ping"
                                style="animation-delay: 1s"
                            ></div>
                            <div
                                class="absolute inset-0 rounded-full border-2 border-pink-400/20 animate-ping"
                                style="animation-delay: 2s"
                            ></div>
                        </div>
                    </div>
                </div>

                <h1
                    class="text-5xl md:text-7xl font-bold text-gray-900 mb-6 leading-tight"
                    style=move || TITLE.style(settled())
                >
                    {letters}
                    <span class="block bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent animate-pulse">
                        {owner.name.clone()}
                    </span>
                </h1>

                <p
                    class="text-xl md:text-2xl text-gray-600 mb-12 max-w-3xl mx-auto leading-relaxed"
                    style=move || TAGLINE.style(settled())
                >
                    {owner.tagline.clone()}
                </p>

                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center mb-16"
                    style=move || ACTIONS.style(settled())
                >
                    <button
                        class="relative overflow-hidden group bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-full text-lg font-medium transition-all duration-300 hover:scale-105 hover:shadow-2xl"
                        on:click=move |_| ctx.navigate(Section::Work)
                    >
                        <span class="relative z-10">"View My Work"</span>
                        <div class="absolute inset-0 bg-gradient-to-r from-purple-600 to-pink-600 opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                    </button>
                    <button
                        class="border-2 border-gray-300 text-gray-700 hover:bg-white/50 backdrop-blur-xl px-8 py-3 rounded-full text-lg font-medium transition-all duration-300 hover:scale-105 hover:shadow-xl"
                        on:click=move |_| ctx.navigate(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>

                <div class="animate-bounce" style=move || SCROLL_HINT.style(settled())>
                    <span class="block text-2xl text-gray-400 animate-pulse">"⌄"</span>
                </div>
            </div>

            <div class="absolute top-1/4 left-10 animate-float text-3xl text-blue-400/30">
                "</>"
            </div>
            <div
                class="absolute top-1/3 right-10 animate-float text-2xl text-purple-400/30"
                style="animation-delay: 1s"
            >
                "🎨"
            </div>
            <div
                class="absolute bottom-1/4 left-1/4 animate-float text-2xl text-pink-400/30"
                style="animation-delay: 2s"
            >
                "⚡"
            </div>
        </section>
    }
}
