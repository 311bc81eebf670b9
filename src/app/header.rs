use leptos::prelude::*;

use crate::{
    content,
    motion::{Stagger, HEADER_SCROLL_THRESHOLD},
};

use super::scroll::use_scrolled_past;

pub const NAV_ITEMS: [(&str, &str); 8] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Talks", "#talks"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = use_scrolled_past(HEADER_SCROLL_THRESHOLD);
    let (menu_open, set_menu_open) = signal(false);
    let name = content::profile()
        .map(|p| p.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <header class=move || {
            if scrolled.get() {
                "header fixed top-0 inset-x-0 z-50 transition-all duration-300 enter-drop bg-background/95 shadow-lg py-2"
            } else {
                "header fixed top-0 inset-x-0 z-50 transition-all duration-300 enter-drop bg-transparent py-4"
            }
        }>
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-cyan hover:scale-105 transition-transform">
                    {name}
                </a>
                <nav class=move || {
                    if menu_open.get() {
                        "flex flex-col absolute top-full inset-x-0 bg-background p-4 gap-3 lg:static lg:flex-row lg:p-0 lg:bg-transparent"
                    } else {
                        "hidden lg:flex lg:flex-row gap-6"
                    }
                }>
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, href))| {
                            view! {
                                <a
                                    href=*href
                                    class="nav-link enter-drop hover:-translate-y-0.5 transition-transform"
                                    style=format!(
                                        "animation-delay: {}ms;",
                                        Stagger::FAST.delay(i).as_millis(),
                                    )
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="lg:hidden flex flex-col gap-1 p-2"
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="block w-6 h-0.5 bg-foreground"></span>
                    <span class="block w-6 h-0.5 bg-foreground"></span>
                    <span class="block w-6 h-0.5 bg-foreground"></span>
                </button>
            </div>
        </header>
    }
}
