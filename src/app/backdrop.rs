use leptos::prelude::*;

use crate::motion::glow_origin;

use super::page::PageContext;

#[component]
pub fn Backdrop() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let glow_style = move || {
        let (left, top) = glow_origin(ctx.pointer.get());
        format!("left: {left}px; top: {top}px; transition: all 0.3s ease-out;")
    };

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div
                class="absolute w-96 h-96 bg-gradient-to-r from-blue-400/20 to-purple-400/20 rounded-full blur-3xl animate-pulse"
                style=glow_style
            />
            <div
                class="absolute top-1/4 left-1/4 w-64 h-64 bg-gradient-to-r from-pink-300/10 to-yellow-300/10 rounded-full blur-2xl animate-bounce"
                style="animation-duration: 6s"
            />
            <div
                class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-gradient-to-r from-green-300/10 to-blue-300/10 rounded-full blur-2xl animate-pulse"
                style="animation-duration: 4s"
            />
        </div>
    }
}
