//! `IntersectionObserver` bridge implementing [`VisibilitySource`].
//!
//! The script reports raw geometry for every observed `[data-section]`
//! element and a `settled` message once scrolling has been idle for the
//! configured delay. A jump arms the same idle timer, so every jump is
//! followed by a `settled` message even when it scrolls nothing. Crossing detection happens on the Rust side with the
//! same [`ThresholdTracker`] the simulated viewport uses.

use std::time::Duration;

use birthday_core::{
    PageError, PageResult, RegionSample, Section, ThresholdTracker, VisibilityBatch,
    VisibilitySource,
};
use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;

const OBSERVER_SCRIPT: &str = r#"
const config = await dioxus.recv();
const settleMs = config.settle_ms ?? 150;
const steps = Array.from({ length: 21 }, (_, i) => i / 20);

const observer = new IntersectionObserver((entries) => {
  dioxus.send({
    kind: "batch",
    samples: entries.map((entry) => ({
      section: entry.target.dataset.section || "",
      visible_height: entry.intersectionRect.height,
      region_height: entry.boundingClientRect.height,
      viewport_height: entry.rootBounds ? entry.rootBounds.height : window.innerHeight,
    })),
  });
}, { threshold: steps });

let idle = null;
const armIdle = () => {
  clearTimeout(idle);
  idle = setTimeout(() => dioxus.send({ kind: "settled" }), settleMs);
};
window.addEventListener("scroll", armIdle, { passive: true });

let open = true;
const close = () => {
  if (!open) return;
  open = false;
  observer.disconnect();
  window.removeEventListener("scroll", armIdle);
  clearTimeout(idle);
  if (window.__birthdayVisibility === close) delete window.__birthdayVisibility;
};
window.__birthdayVisibility = close;

while (open) {
  const message = await dioxus.recv();
  if (message.kind === "observe") {
    const region = document.querySelector(`[data-section="${message.section}"]`);
    if (region) observer.observe(region);
  } else if (message.kind === "jump") {
    armIdle();
  } else if (message.kind === "disconnect") {
    close();
  }
}
"#;

const TEARDOWN_SCRIPT: &str = r#"
if (window.__birthdayVisibility) window.__birthdayVisibility();
"#;

/// Commands sent to the visibility coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityCommand {
    /// A section region mounted; start observing it
    Observe(Section),
    /// A jump started scrolling; settle once the viewport is idle
    Jump,
    /// Stop observing everything
    Disconnect,
}

/// What the coroutine hands to the navigator.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibilityEvent {
    Batch(VisibilityBatch),
    /// Scrolling has been idle for the settle delay
    Settled,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BridgeMessage {
    Batch { samples: Vec<DomSample> },
    Settled,
}

#[derive(Debug, Deserialize)]
struct DomSample {
    section: String,
    visible_height: f64,
    region_height: f64,
    viewport_height: f64,
}

impl DomSample {
    fn into_region_sample(self) -> Option<RegionSample> {
        let section = self.section.parse::<Section>().ok()?;
        Some(RegionSample {
            section,
            visible_height: self.visible_height,
            region_height: self.region_height,
            viewport_height: self.viewport_height,
        })
    }
}

pub struct DomVisibility {
    eval: document::Eval,
    tracker: ThresholdTracker,
}

impl DomVisibility {
    /// Start the observer script.
    ///
    /// `settle` is how long scrolling must be idle before a `settled`
    /// message is sent.
    pub fn connect(threshold: f64, settle: Duration) -> Self {
        let eval = document::eval(OBSERVER_SCRIPT);
        if let Err(e) = eval.send(observer_config(settle)) {
            tracing::warn!(error = ?e, "Failed to configure visibility observer");
        }
        Self {
            eval,
            tracker: ThresholdTracker::new(threshold),
        }
    }

    /// Wait for the next threshold crossing batch or settle notification.
    pub async fn next_event(&mut self) -> PageResult<VisibilityEvent> {
        loop {
            let raw: serde_json::Value = self
                .eval
                .recv()
                .await
                .map_err(|e| PageError::Bridge(format!("{e:?}")))?;

            match serde_json::from_value::<BridgeMessage>(raw)? {
                BridgeMessage::Settled => return Ok(VisibilityEvent::Settled),
                BridgeMessage::Batch { samples } => {
                    let batch = self
                        .tracker
                        .track(samples.into_iter().filter_map(DomSample::into_region_sample));
                    if !batch.is_empty() {
                        return Ok(VisibilityEvent::Batch(batch));
                    }
                }
            }
        }
    }
}

impl DomVisibility {
    /// Arm the idle timer for a jump that was just started.
    pub fn expect_settle(&mut self) -> PageResult<()> {
        self.eval
            .send(json!({ "kind": "jump" }))
            .map_err(|e| PageError::Bridge(format!("{e:?}")))
    }
}

fn observer_config(settle: Duration) -> serde_json::Value {
    json!({ "settle_ms": settle.as_millis() as u64 })
}

impl VisibilitySource for DomVisibility {
    fn subscribe(&mut self, section: Section) -> PageResult<()> {
        // The observer re-sends an initial notification for this element
        self.tracker.forget(section);
        self.eval
            .send(json!({ "kind": "observe", "section": section.as_str() }))
            .map_err(|e| PageError::Bridge(format!("{e:?}")))
    }

    fn unsubscribe_all(&mut self) {
        if let Err(e) = self.eval.send(json!({ "kind": "disconnect" })) {
            tracing::debug!(error = ?e, "Visibility observer already gone");
        }
        self.tracker.reset();
    }
}

/// Disconnect whatever observer is installed, without the coroutine.
pub fn teardown() {
    let _ = document::eval(TEARDOWN_SCRIPT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch_messages() {
        let raw = json!({
            "kind": "batch",
            "samples": [
                { "section": "gallery", "visible_height": 450.0, "region_height": 1600.0, "viewport_height": 900.0 },
                { "section": "", "visible_height": 10.0, "region_height": 10.0, "viewport_height": 900.0 }
            ]
        });

        let BridgeMessage::Batch { samples } = serde_json::from_value(raw).unwrap() else {
            panic!("expected batch");
        };
        let samples: Vec<RegionSample> = samples
            .into_iter()
            .filter_map(DomSample::into_region_sample)
            .collect();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].section, Section::Gallery);
        assert_eq!(samples[0].coverage(), 0.5);
    }

    #[test]
    fn observer_config_carries_settle_delay() {
        let config = observer_config(Duration::from_millis(150));
        assert_eq!(config, json!({ "settle_ms": 150 }));
    }

    #[test]
    fn script_arms_idle_timer_on_jump() {
        let jump = OBSERVER_SCRIPT
            .split("message.kind === \"jump\"")
            .nth(1)
            .expect("jump branch");
        assert!(jump.trim_start().starts_with(") {\n    armIdle();"));
    }

    #[test]
    fn parses_settled_message() {
        let message: BridgeMessage = serde_json::from_value(json!({ "kind": "settled" })).unwrap();
        assert!(matches!(message, BridgeMessage::Settled));
    }
}
