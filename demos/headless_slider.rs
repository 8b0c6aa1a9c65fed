//! Drives a slider through a few switches with a 16ms frame loop and prints
//! what a host would apply each frame.
//!
//! Run with `RUST_LOG=debug` to see the phase transitions.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use view_slider::prelude::*;

struct FrameHost {
    heights: HashMap<usize, f32>,
    timers: FrameTimers,
}

impl Measure for FrameHost {
    fn measure_height(&self, index: usize) -> Option<f32> {
        self.heights.get(&index).copied()
    }

    fn scroll_to_top(&mut self, index: usize) {
        log::info!("scroll view {} to top", index);
    }
}

impl Timers for FrameHost {
    fn now(&self) -> Instant {
        self.timers.now()
    }

    fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError> {
        self.timers.set_timeout(delay)
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.timers.clear_timeout(token)
    }
}

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), SliderError> {
    env_logger::init();

    let mut host = FrameHost {
        heights: HashMap::from([(0, 120.0), (1, 340.0), (2, 200.0)]),
        timers: FrameTimers::new(),
    };

    let config = SliderConfig::new(3)
        .transition_duration(250.0)
        .transition_timing("ease-in-out".parse()?)
        .keep_views_mounted(true);
    let mut slider = ViewSlider::new(config)?
        .on_transition_end(|| log::info!("transition finished"));
    slider.mount(&mut host);

    for target in [1, 2, 0] {
        slider.set_active_view(target)?;
        slider.settle(&mut host);

        let tree = slider.render(|props| format!("<panel {} {}>", props.index, props.transition_state));
        println!("root:     {}", tree.root.style.to_css());
        println!("viewport: {}", tree.viewport.style.to_css());
        for slot in tree.mounted() {
            println!("  {}", slot.content().map(String::as_str).unwrap_or_default());
        }

        loop {
            for token in host.timers.advance(FRAME) {
                slider.handle_timer(token, &mut host);
            }
            let frame = slider.frame(host.timers.now());
            println!(
                "  frame: translate {:>7.2}%  height {:?}",
                frame.translate_percent, frame.height
            );
            if !frame.animating && slider.state().phase() == Phase::Idle {
                break;
            }
        }
    }

    slider.unmount(&mut host);
    Ok(())
}
