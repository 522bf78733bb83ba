//! Widgets Sidebar
//!
//! Ambient noise mixer, mock weather card, focus timer and scratchpad.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::alert;
use crate::components::AmbientMixer;
use crate::context::use_app;

const WORK_SECONDS: u32 = 25 * 60;
const BREAK_SECONDS: u32 = 5 * 60;

fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn test_format_time_pads_both_fields() {
        assert_eq!(format_time(25 * 60), "25:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(0), "00:00");
    }
}

#[component]
fn WeatherCard() -> impl IntoView {
    // Mock data; there is no weather backend
    view! {
        <div class="widget-card weather-card">
            <div class="weather-city">"San Francisco"</div>
            <div class="weather-temp">"72\u{00B0}"</div>
            <div class="weather-condition">"Partly Cloudy"</div>
            <div class="weather-meta">
                <span>"8 mph"</span>
                <span>"UV: 4"</span>
                <span>"45% humidity"</span>
            </div>
        </div>
    }
}

#[component]
fn FocusTimer() -> impl IntoView {
    let time_left = RwSignal::new(WORK_SECONDS);
    let is_active = RwSignal::new(false);
    let is_work_mode = RwSignal::new(true);

    let interval = gloo_timers::callback::Interval::new(1_000, move || {
        if !is_active.get_untracked() {
            return;
        }
        let remaining = time_left.get_untracked();
        if remaining > 1 {
            time_left.set(remaining - 1);
        } else {
            is_active.set(false);
            let work = is_work_mode.get_untracked();
            alert(if work {
                "Focus time over! Take a break."
            } else {
                "Break over! Back to work."
            });
            is_work_mode.set(!work);
            time_left.set(if work { BREAK_SECONDS } else { WORK_SECONDS });
        }
    });
    interval.forget();

    let toggle = move |_| is_active.update(|v| *v = !*v);
    let reset = move |_| {
        is_active.set(false);
        is_work_mode.set(true);
        time_left.set(WORK_SECONDS);
    };

    view! {
        <div class="widget-card timer-card">
            <div class="widget-card-header">
                <h3>"Focus Timer"</h3>
                <span class=move || if is_work_mode.get() { "mode-pill work" } else { "mode-pill break" }>
                    {move || if is_work_mode.get() { "WORK" } else { "BREAK" }}
                </span>
            </div>
            <div class="timer-display">{move || format_time(time_left.get())}</div>
            <div class="timer-controls">
                <button class="primary-btn" on:click=toggle>
                    {move || if is_active.get() { "Pause" } else { "Start" }}
                </button>
                <button class="secondary-btn" title="Reset" on:click=reset>
                    {"\u{21BA}"}
                </button>
            </div>
        </div>
    }
}

#[component]
fn Scratchpad() -> impl IntoView {
    let ctx = use_app();

    let note = move || ctx.engine.with(|e| e.state().note.clone());
    let on_change = move |ev: web_sys::Event| {
        if let Some(area) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
            let text = area.value();
            ctx.engine.update(|e| e.set_note(&text));
        }
    };

    view! {
        <div class="widget-card scratchpad-card">
            <div class="widget-card-header">
                <h3>"Scratchpad"</h3>
            </div>
            <textarea
                class="scratchpad-area"
                placeholder="// Type quick notes here..."
                prop:value=note
                on:change=on_change
            ></textarea>
        </div>
    }
}

#[component]
pub fn Widgets() -> impl IntoView {
    view! {
        <div class="widgets-column">
            <AmbientMixer />
            <WeatherCard />
            <FocusTimer />
            <Scratchpad />
        </div>
    }
}
