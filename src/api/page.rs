//! HTML rendering of the clock

use crate::state::TimerState;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #1e555c; color: #fff; text-align: center; }
#time-length-controls { display: flex; justify-content: center; gap: 3em; }
.controls { display: flex; justify-content: center; gap: 1em; font-size: 1.5em; }
.controls div, #time-controls div { cursor: pointer; user-select: none; }
#timer { margin: 1.5em auto; padding: 1em; width: 12em; border: 4px solid #13353a; border-radius: 2em; }
#time-left { font-size: 3.5em; }
#time-controls { display: flex; justify-content: center; gap: 2em; font-size: 1.2em; }
"#;

const SCRIPT: &str = r#"
const actions = {
  "break-decrement": "/api/break/decrement",
  "break-increment": "/api/break/increment",
  "session-decrement": "/api/session/decrement",
  "session-increment": "/api/session/increment",
  "start_stop": "/api/start_stop",
  "reset": "/api/reset",
};
for (const [id, path] of Object.entries(actions)) {
  document.getElementById(id).addEventListener("click", () => fetch(path, { method: "POST" }));
}
const events = new EventSource("/api/events");
events.addEventListener("state", (message) => {
  const view = JSON.parse(message.data);
  document.getElementById("break-length").textContent = view.break_length;
  document.getElementById("session-length").textContent = view.session_length;
  document.getElementById("timer-label").textContent = view.timer_label;
  document.getElementById("time-left").textContent = view.time_left;
});
"#;

/// Render the widget subtree for `state`, keeping the fixed element ids
pub fn render_widget(state: &TimerState) -> String {
    format!(
        r#"<div id="container">
  <h1 id="clock-header">25 + 5 Clock</h1>
  <div id="time-length-controls">
    <div id="break-label">Break Length
      <div class="controls">
        <div id="break-decrement">-</div>
        <div id="break-length">{break_length}</div>
        <div id="break-increment">+</div>
      </div>
    </div>
    <div id="session-label">Session Length
      <div class="controls">
        <div id="session-decrement">-</div>
        <div id="session-length">{session_length}</div>
        <div id="session-increment">+</div>
      </div>
    </div>
  </div>
  <div id="timer">
    <div id="timer-label">{timer_label}</div>
    <div id="time-left">{time_left}</div>
  </div>
  <div id="time-controls">
    <div id="start_stop">Start/Stop</div>
    <div id="reset">Reset</div>
  </div>
</div>"#,
        break_length = state.break_length,
        session_length = state.session_length,
        timer_label = state.phase,
        time_left = state.time_left(),
    )
}

/// Render the full page hosting the widget
pub fn render_page(state: &TimerState) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>25 + 5 Clock</title>\n<style>{}</style>\n</head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        STYLE,
        render_widget(state),
        SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 17] = [
        "container",
        "clock-header",
        "time-length-controls",
        "break-label",
        "break-decrement",
        "break-length",
        "break-increment",
        "session-label",
        "session-decrement",
        "session-length",
        "session-increment",
        "timer",
        "timer-label",
        "time-left",
        "time-controls",
        "start_stop",
        "reset",
    ];

    #[test]
    fn widget_keeps_every_element_id() {
        let html = render_widget(&TimerState::new());
        for id in IDS {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
    }

    #[test]
    fn widget_shows_current_values() {
        let state = TimerState {
            break_length: 7,
            remaining_seconds: 65,
            ..TimerState::new()
        };
        let html = render_widget(&state);
        assert!(html.contains(r#"<div id="break-length">7</div>"#));
        assert!(html.contains(r#"<div id="session-length">25</div>"#));
        assert!(html.contains(r#"<div id="timer-label">Session</div>"#));
        assert!(html.contains(r#"<div id="time-left">01:05</div>"#));
    }

    #[test]
    fn page_wires_the_event_stream() {
        let html = render_page(&TimerState::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("new EventSource(\"/api/events\")"));
    }
}
