use leptos::prelude::*;

use crate::{
    content::{Portfolio, SocialLink},
    motion::{Entrance, SOCIAL_STAGGER},
    section::Section,
};

use super::page::PageContext;

const SOCIAL: Entrance = Entrance::rise(20, 600, 0);
const EMAIL: Entrance = Entrance::rise(20, 600, 200);

const SOCIAL_BORDER: &str = "background: linear-gradient(white, white) padding-box, linear-gradient(45deg, rgba(59, 130, 246, 0.3), rgba(139, 92, 246, 0.3)) border-box;";
const EMAIL_BORDER: &str = "background: linear-gradient(white, white) padding-box, linear-gradient(45deg, rgba(236, 72, 153, 0.3), rgba(168, 85, 247, 0.3)) border-box; border: 2px solid transparent;";

#[component]
pub fn Contact(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-24 px-6 relative">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6 hover:scale-105 transition-transform duration-300">
                    "Let's Work Together"
                </h2>
                <div class="w-20 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto mb-8 animate-pulse" />
                <div class="bg-white/30 backdrop-blur-xl rounded-3xl p-8 border border-white/20 shadow-2xl mb-12 transition-all duration-500">
                    <p class="text-xl text-gray-700 leading-relaxed">
                        {portfolio.contact_blurb.clone()}
                    </p>
                </div>
                {portfolio
                    .owner
                    .resume
                    .as_ref()
                    .map(|href| {
                        view! {
                            <div class="flex justify-center mb-12">
                                <a
                                    href=href.clone()
                                    download=""
                                    class="border-2 border-gray-300 text-gray-700 hover:bg-white/50 backdrop-blur-xl px-8 py-4 rounded-full text-lg font-medium transition-all duration-300 hover:scale-105 hover:shadow-xl"
                                >
                                    "Download Resume"
                                </a>
                            </div>
                        }
                    })}
                <div class="flex justify-center gap-6">
                    {portfolio
                        .socials
                        .iter()
                        .enumerate()
                        .map(|(index, link)| view! { <Social link index /> })
                        .collect_view()}
                    <CopyEmail address=portfolio.owner.email.clone() />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Social(link: &'static SocialLink, index: usize) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let entrance = SOCIAL.staggered(index, SOCIAL_STAGGER);

    view! {
        <a
            href=link.href.clone()
            target="_blank"
            rel="noopener noreferrer"
            title=link.label.clone()
            aria-label=link.label.clone()
            class="w-12 h-12 bg-white/30 backdrop-blur-xl hover:bg-white/50 rounded-full flex items-center justify-center transition-all duration-300 border-2 hover:scale-110 hover:shadow-xl group"
            style=move || format!("{} {SOCIAL_BORDER}", entrance.style(ctx.loaded.get()))
        >
            <i class=format!("{} text-xl group-hover:scale-110 transition-transform duration-300", link.icon) />
        </a>
    }
}

#[component]
fn CopyEmail(address: String) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let label = {
        let address = address.clone();
        move || {
            if ctx.email_copied.get() {
                "Copied!".to_string()
            } else {
                address.clone()
            }
        }
    };
    let title = move || {
        if ctx.email_copied.get() {
            "Email copied!"
        } else {
            "Click to copy email"
        }
    };

    view! {
        <button
            class="bg-white/30 backdrop-blur-xl hover:bg-white/50 rounded-full px-4 py-3 transition-all duration-300 border-2 hover:scale-110 hover:shadow-xl hover:shadow-purple-500/25 text-gray-700 group"
            style=move || format!("{} {EMAIL_BORDER}", EMAIL.style(ctx.loaded.get()))
            title=title
            on:click=move |_| ctx.copy_email(address.clone())
        >
            <span class="text-sm font-medium group-hover:scale-110 transition-transform duration-300">
                {label}
            </span>
        </button>
    }
}
