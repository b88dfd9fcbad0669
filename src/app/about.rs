use std::time::Duration;

use leptos::prelude::*;

use crate::{content, motion::stagger_delay, section::Section};

const CHIP_STEP: Duration = Duration::from_millis(100);

#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6 hover:scale-105 transition-transform duration-300">
                {title}
            </h2>
            <div class="w-20 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto animate-pulse" />
        </div>
    }
}

#[component]
pub fn About(about: &'static content::About) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="About Me" />
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="group">
                        <div class="w-full h-96 rounded-3xl bg-gradient-to-br from-white/40 to-white/10 backdrop-blur-xl border border-white/20 shadow-2xl mb-8 overflow-hidden relative hover:scale-105 transition-all duration-500">
                            <img
                                src=about.portrait.clone()
                                alt="Profile"
                                width="400"
                                height="400"
                                class="w-full h-full object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                        </div>
                    </div>
                    <div class="space-y-6">
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <div class="bg-white/30 backdrop-blur-xl rounded-2xl p-6 border border-white/20 shadow-xl hover:shadow-2xl transition-all duration-300 hover:scale-105">
                                        <p class="text-lg text-gray-700 leading-relaxed">{p.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3 pt-4">
                            {about
                                .highlights
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <span
                                            class="px-4 py-2 bg-white/50 backdrop-blur-xl rounded-full text-sm font-medium text-gray-700 shadow-lg border border-white/20 hover:scale-110 hover:bg-white/70 transition-all duration-300"
                                            style=format!(
                                                "animation-delay: {}ms",
                                                stagger_delay(i, CHIP_STEP).as_millis(),
                                            )
                                        >
                                            {skill.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
