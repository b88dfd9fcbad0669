use leptos::prelude::*;

use crate::content::build_year;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="py-8 px-6 border-t border-white/20 bg-white/20 backdrop-blur-xl">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-gray-600 flex items-center justify-center gap-2">
                    {format!("© {} {name}. Designed and built with", build_year())}
                    <span class="text-red-500 animate-pulse">"♥"</span>
                    "using Rust, Leptos and Tailwind CSS."
                </p>
            </div>
        </footer>
    }
}
