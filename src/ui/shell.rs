use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-emerald-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🌱" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-emerald-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "pack it greener" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Recommend {}),
                            onclick: move |_| { nav.push(Route::Recommend {}); },
                            label: "📦 Recommend",
                        }
                        NavButton {
                            active: matches!(current_route, Route::History {}),
                            onclick: move |_| { nav.push(Route::History {}); },
                            label: "🗂 History",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Insights {}),
                            onclick: move |_| { nav.push(Route::Insights {}); },
                            label: "📊 Insights",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
