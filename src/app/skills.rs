use leptos::prelude::*;

use crate::{
    content::SkillGroup,
    motion::{stagger_delay, Entrance, SKILL_ITEM_STAGGER, SKILL_STAGGER},
    section::Section,
};

use super::{about::SectionHeading, page::PageContext};

const CARD: Entrance = Entrance::rise(30, 600, 0);

#[component]
pub fn Skills(groups: &'static [SkillGroup]) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <section id=Section::Skills.id() class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Skills & Expertise" />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {groups
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            let entrance = CARD.staggered(i, SKILL_STAGGER);
                            view! {
                                <div
                                    class="rounded-2xl bg-white/30 backdrop-blur-xl border border-white/20 shadow-xl hover:shadow-2xl transition-all duration-500 hover:scale-105 hover:-translate-y-2 group relative overflow-hidden"
                                    style=move || entrance.style(ctx.loaded.get())
                                >
                                    <div class=format!(
                                        "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                                        group.gradient,
                                    ) />
                                    <div class="p-6 relative z-10">
                                        <div class="flex items-center gap-3 mb-4">
                                            <div class="text-2xl text-blue-600 group-hover:scale-110 transition-transform duration-300">
                                                {group.icon.clone()}
                                            </div>
                                            <h3 class="text-xl font-semibold text-gray-900 group-hover:text-blue-600 transition-colors duration-300">
                                                {group.category.clone()}
                                            </h3>
                                        </div>
                                        <ul class="space-y-2">
                                            {group
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(j, skill)| {
                                                    view! {
                                                        <li
                                                            class="text-gray-600 flex items-center group-hover:translate-x-1 transition-transform duration-300"
                                                            style=format!(
                                                                "transition-delay: {}ms",
                                                                stagger_delay(j, SKILL_ITEM_STAGGER).as_millis(),
                                                            )
                                                        >
                                                            <div class="w-2 h-2 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full mr-3 animate-pulse" />
                                                            {skill.clone()}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
