use leptos::{either::Either, prelude::*};

use crate::{
    content::Project,
    motion::{Entrance, WORK_STAGGER},
    section::Section,
};

use super::{about::SectionHeading, page::PageContext};

const CARD: Entrance = Entrance::rise(50, 800, 0);

#[component]
pub fn Work(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Work.id() class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Featured Work" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let entrance = CARD.staggered(index, WORK_STAGGER);

    let image = view! {
        <div class="relative overflow-hidden rounded-t-2xl">
            <img
                src=project.image.clone()
                alt=project.title.clone()
                width="400"
                height="300"
                class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                <span class="text-3xl text-white transform scale-0 group-hover:scale-100 transition-transform duration-300">
                    "↗"
                </span>
            </div>
        </div>
    };

    view! {
        <div
            class="group rounded-2xl hover:shadow-2xl transition-all duration-500 shadow-xl hover:-translate-y-4 bg-white/30 backdrop-blur-xl border border-white/20 overflow-hidden relative"
            style=move || entrance.style(ctx.loaded.get())
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                project.gradient,
            ) />
            <div class="p-0 relative z-10">
                {match &project.link {
                    Some(href) => {
                        Either::Left(
                            view! {
                                <a href=href.clone() target="_blank" rel="noopener noreferrer">
                                    {image}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(image),
                }}
                <div class="p-6">
                    <h3 class="text-xl font-semibold text-gray-900 mb-3 group-hover:text-blue-600 transition-colors duration-300">
                        {project.title.clone()}
                    </h3>
                    <p class="text-gray-600 mb-4 leading-relaxed">{project.description.clone()}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-white/50 backdrop-blur-xl text-gray-700 text-sm rounded-full font-medium border border-white/20 hover:scale-110 transition-transform duration-300">
                                        {tag.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
