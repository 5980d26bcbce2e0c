use dioxus::{prelude::*, signals::Signal};
use tracing::warn;

use crate::{
    domain::{AppState, DatasetStatus},
    infra::{
        dataset::{dataset_path, load_materials},
        history::{HistoryStore, JsonHistoryStore},
    },
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{HistoryPage, InsightsPage, RecommendPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/recommend")]
    Recommend {},
    #[route("/history")]
    History {},
    #[route("/insights")]
    Insights {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }

            match JsonHistoryStore::at_default_location().load_all() {
                Ok(history) => state.with_mut(|st| st.history = history),
                Err(err) => warn!("failed to load recommendation history: {err}"),
            }

            load_dataset_into(&mut state);
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!("failed to persist user settings: {err}");
    }
}

/// Read the materials CSV into the shared state and report the outcome as a
/// toast. Used by the retry/reload buttons.
pub fn reload_dataset(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let status = load_dataset_into(&mut state);
    match status {
        DatasetStatus::Loaded { rows, skipped, .. } => push_toast(
            toasts,
            ToastKind::Success,
            format!("Loaded {rows} materials ({skipped} rows skipped)."),
        ),
        DatasetStatus::Failed(message) => {
            push_toast(toasts, ToastKind::Error, format!("Dataset load failed: {message}"))
        }
        DatasetStatus::NotLoaded => {}
    }
}

fn load_dataset_into(state: &mut Signal<AppState>) -> DatasetStatus {
    let path = dataset_path();
    let status = match load_materials(&path) {
        Ok(loaded) => {
            let status = DatasetStatus::Loaded {
                path: path.display().to_string(),
                rows: loaded.materials.len(),
                skipped: loaded.skipped,
                loaded_at: std::time::SystemTime::now(),
            };
            state.with_mut(|st| {
                st.materials = loaded.materials;
                st.dataset = status.clone();
            });
            status
        }
        Err(err) => {
            warn!("materials dataset unavailable: {err}");
            let status = DatasetStatus::Failed(err.to_string());
            state.with_mut(|st| {
                st.materials.clear();
                st.dataset = status.clone();
            });
            status
        }
    };
    status
}

#[component]
pub fn Recommend() -> Element {
    rsx! { Shell { RecommendPage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}

#[component]
pub fn Insights() -> Element {
    rsx! { Shell { InsightsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
