//! Greeting Component
//!
//! Live clock with a time-of-day greeting.

use leptos::prelude::*;

fn now_parts() -> (u32, u32) {
    let date = js_sys::Date::new_0();
    (date.get_hours(), date.get_minutes())
}

fn greeting_for(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

#[cfg(test)]
mod tests {
    use super::greeting_for;

    #[test]
    fn test_greeting_tracks_time_of_day() {
        assert_eq!(greeting_for(8), "Good Morning");
        assert_eq!(greeting_for(13), "Good Afternoon");
        assert_eq!(greeting_for(21), "Good Evening");
    }
}

#[component]
pub fn Greeting() -> impl IntoView {
    let time = RwSignal::new(now_parts());

    let interval = gloo_timers::callback::Interval::new(1_000, move || {
        time.set(now_parts());
    });
    interval.forget();

    let clock = move || {
        let (hour, minute) = time.get();
        format!("{:02}:{:02}", hour, minute)
    };
    let greeting = move || greeting_for(time.get().0);

    view! {
        <div class="greeting">
            <span class="greeting-clock">{clock}</span>
            <h2 class="greeting-text">{greeting}</h2>
        </div>
    }
}
