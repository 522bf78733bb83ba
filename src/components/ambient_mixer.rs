//! Ambient Mixer Component
//!
//! Loops generated brown/pink noise through the Web Audio API. The 2-second
//! buffer is filled in Rust and handed to an `AudioBufferSourceNode`; the
//! gain node carries volume changes with a short exponential ramp.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{AudioBufferSourceNode, AudioContext, GainNode};

#[derive(Clone, Copy, PartialEq, Eq)]
enum NoiseKind {
    Brown,
    Pink,
}

struct AudioGraph {
    context: AudioContext,
    gain: GainNode,
    source: AudioBufferSourceNode,
}

fn fill_noise(output: &mut [f32], kind: NoiseKind) {
    match kind {
        NoiseKind::Pink => {
            // Paul Kellet's pink noise filter
            let (mut b0, mut b1, mut b2, mut b3, mut b4, mut b5, mut b6) =
                (0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32, 0.0f32);
            for sample in output.iter_mut() {
                let white = (js_sys::Math::random() as f32) * 2.0 - 1.0;
                b0 = 0.99886 * b0 + white * 0.0555179;
                b1 = 0.99332 * b1 + white * 0.0750759;
                b2 = 0.96900 * b2 + white * 0.1538520;
                b3 = 0.86650 * b3 + white * 0.3104856;
                b4 = 0.55000 * b4 + white * 0.5329522;
                b5 = -0.7616 * b5 - white * 0.0168980;
                *sample = (b0 + b1 + b2 + b3 + b4 + b5 + b6 + white * 0.5362) * 0.11;
                b6 = white * 0.115926;
            }
        }
        NoiseKind::Brown => {
            let mut last = 0.0f32;
            for sample in output.iter_mut() {
                let white = (js_sys::Math::random() as f32) * 2.0 - 1.0;
                last = (last + 0.02 * white) / 1.02;
                *sample = last * 3.5;
            }
        }
    }
}

fn start_noise(kind: NoiseKind, volume: f64) -> Result<AudioGraph, JsValue> {
    let context = AudioContext::new()?;
    let sample_rate = context.sample_rate();
    let length = (sample_rate * 2.0) as u32; // 2 seconds buffer
    let buffer = context.create_buffer(1, length, sample_rate)?;

    let mut data = vec![0.0f32; length as usize];
    fill_noise(&mut data, kind);
    buffer.copy_to_channel(&mut data, 0)?;

    let source = context.create_buffer_source()?;
    source.set_buffer(Some(&buffer));
    source.set_loop(true);

    let gain = context.create_gain()?;
    gain.gain().set_value(volume as f32);

    source.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;
    source.start()?;

    Ok(AudioGraph {
        context,
        gain,
        source,
    })
}

fn stop_noise(graph: &AudioGraph) {
    let _ = graph.source.stop();
    let _ = graph.context.close();
}

#[component]
pub fn AmbientMixer() -> impl IntoView {
    let is_playing = RwSignal::new(false);
    let volume = RwSignal::new(0.5f64);
    let noise_kind = RwSignal::new(NoiseKind::Brown);

    // The audio graph is not Send; keep it in thread-local storage
    let graph: StoredValue<Option<AudioGraph>, LocalStorage> = StoredValue::new_local(None);

    let stop_current = move || {
        graph.update_value(|slot| {
            if let Some(current) = slot.take() {
                stop_noise(&current);
            }
        });
    };

    let start_current = move || {
        match start_noise(noise_kind.get_untracked(), volume.get_untracked()) {
            Ok(built) => {
                graph.set_value(Some(built));
                is_playing.set(true);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[AUDIO] start failed: {:?}", e).into());
                is_playing.set(false);
            }
        }
    };

    let toggle_play = move |_| {
        if is_playing.get_untracked() {
            stop_current();
            is_playing.set(false);
        } else {
            start_current();
        }
    };

    let set_kind = move |kind: NoiseKind| {
        noise_kind.set(kind);
        // Restart with a freshly generated buffer
        if is_playing.get_untracked() {
            stop_current();
            start_current();
        }
    };

    let on_volume_input = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Ok(value) = input.value().parse::<f64>() else {
            return;
        };
        volume.set(value);
        graph.with_value(|slot| {
            if let Some(current) = slot {
                let target = value.max(0.001) as f32;
                let _ = current
                    .gain
                    .gain()
                    .exponential_ramp_to_value_at_time(target, current.context.current_time() + 0.1);
            }
        });
    };

    let kind_class = move |kind: NoiseKind| {
        move || {
            if noise_kind.get() == kind {
                "noise-kind-btn active"
            } else {
                "noise-kind-btn"
            }
        }
    };

    view! {
        <div class="widget-card ambient-card">
            <div class="widget-card-header">
                <h3>"Focus Audio"</h3>
                <div class="noise-kind-row">
                    <button class=kind_class(NoiseKind::Brown) on:click=move |_| set_kind(NoiseKind::Brown)>
                        "DEEP"
                    </button>
                    <button class=kind_class(NoiseKind::Pink) on:click=move |_| set_kind(NoiseKind::Pink)>
                        "SOFT"
                    </button>
                </div>
            </div>

            <div class="ambient-controls">
                <button
                    class=move || if is_playing.get() { "play-btn playing" } else { "play-btn" }
                    on:click=toggle_play
                >
                    {move || if is_playing.get() { "\u{25A0}" } else { "\u{25B6}" }}
                </button>

                <div class="volume-wrap">
                    <div class="volume-label">
                        <span>"Intensity"</span>
                        <span>{move || format!("{}%", (volume.get() * 100.0).round() as u32)}</span>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        prop:value=move || volume.get().to_string()
                        on:input=on_volume_input
                    />
                </div>
            </div>
        </div>
    }
}
