//! `<audio>` element bridge implementing [`AudioSink`].

use birthday_core::{AudioSink, PlaybackError};
use dioxus::prelude::*;
use serde::Deserialize;

/// DOM id of the page's audio element.
pub const AUDIO_ELEMENT_ID: &str = "birthday-audio";

const PLAY_SCRIPT: &str = r#"
const audio = document.getElementById("__AUDIO_ID__");
if (!audio) {
  dioxus.send({ ok: false, missing: true, reason: "audio element not mounted" });
} else {
  try {
    await audio.play();
    dioxus.send({ ok: true, missing: false, reason: null });
  } catch (err) {
    dioxus.send({ ok: false, missing: false, reason: String(err && err.name ? err.name : err) });
  }
}
"#;

const PAUSE_SCRIPT: &str = r#"
const audio = document.getElementById("__AUDIO_ID__");
if (audio) audio.pause();
"#;

const RELEASE_SCRIPT: &str = r#"
const audio = document.getElementById("__AUDIO_ID__");
if (audio) {
  audio.pause();
  audio.removeAttribute("src");
  audio.load();
}
if (window.__birthdayAudioWatch) window.__birthdayAudioWatch();
"#;

const WATCH_SCRIPT: &str = r#"
const audio = document.getElementById("__AUDIO_ID__");
if (audio) {
  const onPlay = () => dioxus.send(true);
  const onPause = () => dioxus.send(false);
  audio.addEventListener("play", onPlay);
  audio.addEventListener("pause", onPause);
  audio.addEventListener("ended", onPause);
  let done;
  const finished = new Promise((resolve) => { done = resolve; });
  window.__birthdayAudioWatch = () => {
    audio.removeEventListener("play", onPlay);
    audio.removeEventListener("pause", onPause);
    audio.removeEventListener("ended", onPause);
    delete window.__birthdayAudioWatch;
    done();
  };
  await finished;
}
"#;

fn script(template: &str) -> String {
    template.replace("__AUDIO_ID__", AUDIO_ELEMENT_ID)
}

#[derive(Debug, Deserialize)]
struct PlayReply {
    ok: bool,
    #[serde(default)]
    missing: bool,
    reason: Option<String>,
}

impl PlayReply {
    fn into_result(self) -> Result<(), PlaybackError> {
        if self.ok {
            return Ok(());
        }
        let reason = self.reason.unwrap_or_else(|| "unknown".to_string());
        if self.missing {
            Err(PlaybackError::Unavailable(reason))
        } else {
            Err(PlaybackError::Blocked(reason))
        }
    }
}

/// The page's `<audio>` element, driven through the webview.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebAudio;

impl AudioSink for WebAudio {
    async fn play(&mut self) -> Result<(), PlaybackError> {
        let mut eval = document::eval(&script(PLAY_SCRIPT));
        let raw: serde_json::Value = eval
            .recv()
            .await
            .map_err(|e| PlaybackError::Unavailable(format!("{e:?}")))?;
        serde_json::from_value::<PlayReply>(raw)
            .map_err(|e| PlaybackError::Unavailable(e.to_string()))?
            .into_result()
    }

    async fn pause(&mut self) {
        let _ = document::eval(&script(PAUSE_SCRIPT));
    }
}

/// Stop and unload the audio element. Usable from drop handlers.
pub fn release_now() {
    let _ = document::eval(&script(RELEASE_SCRIPT));
}

/// Play/pause notifications from the audio element itself (media keys,
/// track end, the webview pausing it).
pub struct AudioWatch {
    eval: document::Eval,
}

impl AudioWatch {
    pub fn start() -> Self {
        Self {
            eval: document::eval(&script(WATCH_SCRIPT)),
        }
    }

    /// Next observed state, `None` once the watch has ended.
    pub async fn next(&mut self) -> Option<bool> {
        let raw: serde_json::Value = self.eval.recv().await.ok()?;
        raw.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scripts_target_the_audio_element() {
        for template in [PLAY_SCRIPT, PAUSE_SCRIPT, RELEASE_SCRIPT, WATCH_SCRIPT] {
            let rendered = script(template);
            assert!(rendered.contains(AUDIO_ELEMENT_ID));
            assert!(!rendered.contains("__AUDIO_ID__"));
        }
    }

    #[test]
    fn play_replies_map_to_outcomes() {
        let ok: PlayReply = serde_json::from_value(json!({ "ok": true, "reason": null })).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let blocked: PlayReply = serde_json::from_value(
            json!({ "ok": false, "missing": false, "reason": "NotAllowedError" }),
        )
        .unwrap();
        assert_eq!(
            blocked.into_result(),
            Err(PlaybackError::Blocked("NotAllowedError".into()))
        );

        let missing: PlayReply =
            serde_json::from_value(json!({ "ok": false, "missing": true, "reason": "gone" }))
                .unwrap();
        assert!(matches!(
            missing.into_result(),
            Err(PlaybackError::Unavailable(_))
        ));
    }
}
